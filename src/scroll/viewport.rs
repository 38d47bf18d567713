//! Capability interface for scroll containers
//!
//! The wheel adapter never touches a concrete container. It only needs to
//! read and write one offset per axis, read the configured increments and
//! switch off the container's own wheel handling.

use super::ScrollStep;

/// One scroll dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Size of displayed content or of the visible window, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub width: usize,
    pub height: usize,
}

impl Extent {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Length along the given axis
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Something that can be shown inside a scroll container
pub trait ViewContent {
    /// Full size of the content; the container's scroll range derives from it
    fn extent(&self) -> Extent;
}

/// Scroll container as seen by the wheel adapter
pub trait Viewport {
    /// Current offset along `axis`
    fn value(&self, axis: Axis) -> i32;

    /// Request a new offset; the container clamps it to its own range
    fn set_value(&mut self, axis: Axis, value: i32);

    /// Offset delta applied per wheel unit
    fn block_increment(&self, axis: Axis) -> i32;

    /// Offset delta applied per line step
    fn unit_increment(&self, axis: Axis) -> i32;

    /// Replace both increments of `axis`
    fn set_increments(&mut self, axis: Axis, step: ScrollStep);

    /// Turn the container's built-in wheel behavior on or off
    fn set_wheel_scrolling_enabled(&mut self, enabled: bool);

    /// Resize the scrollable range to fit content of the given size
    fn set_view_extent(&mut self, extent: Extent);
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod viewport_tests;
