//! Scrollbar rendering for the scroll pane
//!
//! Draws a ratatui `Scrollbar` on the border of the view for either axis.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::{Axis, ScrollBar};
use crate::theme;

/// Render the scrollbar for `axis` on the matching border of `area`
///
/// Nothing is drawn when the content fits in the visible window.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area including borders
/// * `axis` - Vertical draws on the right border, horizontal on the bottom
/// * `bar` - Range and position to display
pub fn render_scrollbar(frame: &mut Frame, area: Rect, axis: Axis, bar: &ScrollBar) {
    if !bar.is_scrollable() {
        return;
    }

    let orientation = match axis {
        Axis::Vertical => ScrollbarOrientation::VerticalRight,
        Axis::Horizontal => ScrollbarOrientation::HorizontalBottom,
    };

    let scrollbar = Scrollbar::new(orientation)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme::scrollbar::DEFAULT))
        .track_style(Style::default().fg(theme::scrollbar::TRACK));

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // Passing content_length = max_value + 1 lets the thumb reach the end.
    let max_value = bar.max_value() as usize;
    let mut state = ScrollbarState::new(max_value + 1)
        .position(bar.value() as usize)
        .viewport_content_length(bar.visible_amount as usize);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
