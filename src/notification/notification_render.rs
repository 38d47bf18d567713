//! Notification overlay
//!
//! Drawn last, in the top-right corner, over whatever the view shows.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

const MARGIN: u16 = 2;
const HEIGHT: u16 = 3;

/// Area for a message box of `message_width` columns inside `frame_area`
///
/// `None` when the frame is too small to hold a readable box.
fn overlay_area(frame_area: Rect, message_width: u16) -> Option<Rect> {
    // One padding column on each side plus the borders
    let width = message_width.saturating_add(4);
    let right = width.saturating_add(MARGIN);
    let area = Rect {
        x: frame_area.width.saturating_sub(right),
        y: MARGIN,
        width: width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: HEIGHT.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    (area.width >= 5 && area.height >= HEIGHT).then_some(area)
}

/// Render the current notification, dropping it first if it expired
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };
    let Some(area) = overlay_area(frame.area(), notif.message.chars().count() as u16) else {
        return;
    };

    let colors = notif.kind.colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));
    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
