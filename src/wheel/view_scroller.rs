//! Wheel routing for graphic views
//!
//! The wheel alone scrolls vertically, shift + wheel scrolls horizontally
//! and control + wheel asks the observer to change the zoom.

use std::fmt;

use super::WheelEvent;
use crate::scroll::{Axis, ScrollPane, ScrollStep, ViewContent, Viewport};

pub const ZOOM_IN: &str = "zoomIn";
pub const ZOOM_OUT: &str = "zoomOut";

/// Zoom direction sent to the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSignal {
    ZoomIn,
    ZoomOut,
}

impl ZoomSignal {
    pub fn as_str(self) -> &'static str {
        match self {
            ZoomSignal::ZoomIn => ZOOM_IN,
            ZoomSignal::ZoomOut => ZOOM_OUT,
        }
    }
}

impl fmt::Display for ZoomSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single observer slot, usually the displayed view
pub type ZoomObserver = Box<dyn FnMut(ZoomSignal)>;

/// What a wheel event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    Zoom(ZoomSignal),
    /// Offset before and after the container clamped it
    Scroll {
        axis: Axis,
        from: i32,
        to: i32,
    },
}

/// Scroll container wrapper that owns all wheel handling
pub struct ViewScroller<V: Viewport = ScrollPane> {
    viewport: V,
    observer: Option<ZoomObserver>,
}

impl<V: Viewport> ViewScroller<V> {
    /// Take over wheel handling of `viewport` with the default steps
    pub fn new(viewport: V) -> Self {
        Self::with_step(viewport, ScrollStep::default())
    }

    /// Same as `new` with a custom step applied to both axes
    pub fn with_step(mut viewport: V, step: ScrollStep) -> Self {
        viewport.set_wheel_scrolling_enabled(false);

        let mut scroller = Self {
            viewport,
            observer: None,
        };
        scroller.set_step(step);
        scroller
    }

    pub fn with_observer(viewport: V, observer: impl FnMut(ZoomSignal) + 'static) -> Self {
        let mut scroller = Self::new(viewport);
        scroller.set_observer(observer);
        scroller
    }

    pub fn with_view<C: ViewContent>(
        viewport: V,
        content: &C,
        observer: impl FnMut(ZoomSignal) + 'static,
    ) -> Self {
        let mut scroller = Self::with_observer(viewport, observer);
        scroller.set_view(content);
        scroller
    }

    /// Apply `step` to both axes
    pub fn set_step(&mut self, step: ScrollStep) {
        for axis in Axis::ALL {
            self.viewport.set_increments(axis, step);
        }
    }

    /// Show `content`; its extent becomes the scrollable range
    pub fn set_view<C: ViewContent>(&mut self, content: &C) {
        self.viewport.set_view_extent(content.extent());
    }

    /// Replace the observer, usually the view being displayed
    pub fn set_observer(&mut self, observer: impl FnMut(ZoomSignal) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Route one wheel event
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> WheelOutcome {
        if event.ctrl {
            let signal = if event.wheel_rotation > 0 {
                ZoomSignal::ZoomOut
            } else {
                ZoomSignal::ZoomIn
            };
            self.emit(signal);
            return WheelOutcome::Zoom(signal);
        }

        let axis = if event.shift {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };

        let from = self.viewport.value(axis);
        let delta = self
            .viewport
            .block_increment(axis)
            .saturating_mul(event.units_to_scroll);
        self.viewport.set_value(axis, from.saturating_add(delta));
        let to = self.viewport.value(axis);

        #[cfg(debug_assertions)]
        log::debug!("Wheel {:?}: {} -> {} ({:+})", axis, from, to, delta);

        WheelOutcome::Scroll { axis, from, to }
    }

    /// Notify the observer; nothing happens when none is set
    pub fn emit(&mut self, signal: ZoomSignal) {
        #[cfg(debug_assertions)]
        log::debug!("Zoom {} (observer: {})", signal, self.has_observer());

        if let Some(observer) = self.observer.as_mut() {
            observer(signal);
        }
    }
}

impl<V: Viewport + fmt::Debug> fmt::Debug for ViewScroller<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewScroller")
            .field("viewport", &self.viewport)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "view_scroller_tests.rs"]
mod view_scroller_tests;
