//! Wheel input as seen by the view scroller
//!
//! Terminal mouse events carry one notch per event and no unit count, so
//! `from_mouse` derives `units_to_scroll` from the configured lines per
//! notch, the same way desktop toolkits do.

use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEvent {
    pub ctrl: bool,
    pub shift: bool,
    /// Notches turned; positive means away from the content start
    pub wheel_rotation: i32,
    /// Signed scroll units, `wheel_rotation` times lines per notch
    pub units_to_scroll: i32,
}

impl WheelEvent {
    pub fn new(wheel_rotation: i32, units_to_scroll: i32) -> Self {
        Self {
            ctrl: false,
            shift: false,
            wheel_rotation,
            units_to_scroll,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Convert a crossterm mouse event; `None` for anything but vertical wheel
    pub fn from_mouse(mouse: &MouseEvent, wheel_lines: i32) -> Option<Self> {
        let wheel_rotation = match mouse.kind {
            MouseEventKind::ScrollDown => 1,
            MouseEventKind::ScrollUp => -1,
            _ => return None,
        };

        Some(Self {
            ctrl: mouse.modifiers.contains(KeyModifiers::CONTROL),
            shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
            wheel_rotation,
            units_to_scroll: wheel_rotation.saturating_mul(wheel_lines),
        })
    }
}

#[cfg(test)]
#[path = "wheel_event_tests.rs"]
mod wheel_event_tests;
