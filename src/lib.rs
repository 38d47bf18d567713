//! viewscroll library - Terminal text viewer driven by the mouse wheel
//!
//! The wheel adapter lives in [`wheel`]: plain wheel scrolls vertically,
//! shift+wheel scrolls horizontally and ctrl+wheel asks the observer to zoom.

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod help_line;
pub mod input;
pub mod notification;
pub mod scroll;
pub mod theme;
pub mod wheel;
pub mod widgets;
pub mod zoom;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use scroll::{Axis, ScrollPane, ScrollStep, Viewport};
pub use wheel::{ViewScroller, WheelEvent, ZOOM_IN, ZOOM_OUT, ZoomSignal};
