//! Mouse event dispatcher
//!
//! Wheel events over the view go to the pane's built-in wheel handling
//! while it is enabled, otherwise to the view scroller. Everything else is
//! ignored.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::wheel::{WheelEvent, WheelOutcome};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.is_inside_view(mouse.column, mouse.row) {
        return;
    }

    let Some(wheel) = WheelEvent::from_mouse(&mouse, app.wheel_lines) else {
        return;
    };

    let pane = app.scroller.viewport_mut();
    if pane.scroll_by_wheel(wheel.units_to_scroll) {
        app.mark_dirty();
        return;
    }

    match app.scroller.handle_wheel(&wheel) {
        WheelOutcome::Zoom(_) => app.poll_zoom_signals(),
        WheelOutcome::Scroll { from, to, .. } if from == to => return,
        WheelOutcome::Scroll { .. } => {}
    }

    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
