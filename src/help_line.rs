use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::scroll::{Axis, Viewport};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_hints() -> Vec<(&'static str, &'static str)> {
    hints![
        "Wheel" => "Scroll",
        "Shift+Wheel" => "Pan",
        "Ctrl+Wheel" => "Zoom",
        "+/-" => "Zoom",
        "q" => "Quit",
    ]
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

/// Current offsets, e.g. "x 40  y 120"
pub fn position_text(app: &App) -> String {
    let pane = app.scroller.viewport();
    format!(
        "x {}  y {} ",
        pane.value(Axis::Horizontal),
        pane.value(Axis::Vertical)
    )
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let position = position_text(app);
    let width = position.len() as u16;
    let [hints_area, position_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(width)]).areas(area);

    let help = Paragraph::new(Line::from(build_styled_spans(&get_hints())));
    frame.render_widget(help, hints_area);

    let position = Paragraph::new(Line::from(Span::styled(
        position,
        Style::default().fg(theme::help_line::POSITION),
    )));
    frame.render_widget(position, position_area);
}
