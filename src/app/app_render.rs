use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::scroll::{Axis, Extent, Viewport};
use crate::theme;
use crate::widgets::scrollbar::render_scrollbar;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [view_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.source_name), theme::view::TITLE),
            Span::styled(
                format!(" {}% ", self.canvas.zoom().percent()),
                theme::view::ZOOM_BADGE,
            ),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::view::BORDER))
            .title(title)
            .style(Style::default().bg(theme::view::BACKGROUND));

        let inner = block.inner(view_area);
        self.view_area = Some(inner);
        self.scroller
            .viewport_mut()
            .set_visible_extent(Extent::new(inner.width as usize, inner.height as usize));

        let pane = self.scroller.viewport();
        let rows = self.canvas.visible_rows(
            pane.value(Axis::Horizontal) as usize,
            pane.value(Axis::Vertical) as usize,
            inner.width as usize,
            inner.height as usize,
        );
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        let view = Paragraph::new(lines)
            .style(Style::default().fg(theme::view::TEXT))
            .block(block);
        frame.render_widget(view, view_area);

        let vertical_edge = view_area.inner(Margin {
            horizontal: 0,
            vertical: 1,
        });
        let horizontal_edge = view_area.inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        render_scrollbar(frame, vertical_edge, Axis::Vertical, &pane.vertical);
        render_scrollbar(frame, horizontal_edge, Axis::Horizontal, &pane.horizontal);

        crate::help_line::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
