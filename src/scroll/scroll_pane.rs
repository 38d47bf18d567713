use super::{Axis, Extent, ScrollBar, ScrollStep, Viewport};

/// Two-axis scroll container
///
/// Owns one `ScrollBar` per axis. Out of the box it scrolls vertically on
/// wheel input by `unit_increment` per unit, like most toolkits do; hosts
/// that route the wheel themselves switch that off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollPane {
    pub horizontal: ScrollBar,
    pub vertical: ScrollBar,
    wheel_scrolling_enabled: bool,
    view_extent: Extent,
    visible_extent: Extent,
}

impl ScrollPane {
    pub fn new() -> Self {
        Self {
            horizontal: ScrollBar::new(),
            vertical: ScrollBar::new(),
            wheel_scrolling_enabled: true,
            view_extent: Extent::default(),
            visible_extent: Extent::default(),
        }
    }

    pub fn bar(&self, axis: Axis) -> &ScrollBar {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn bar_mut(&mut self, axis: Axis) -> &mut ScrollBar {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub fn is_wheel_scrolling_enabled(&self) -> bool {
        self.wheel_scrolling_enabled
    }

    /// Built-in wheel handling
    ///
    /// Returns false without touching any offset when disabled.
    pub fn scroll_by_wheel(&mut self, units_to_scroll: i32) -> bool {
        if !self.wheel_scrolling_enabled {
            return false;
        }
        self.vertical.scroll_units(units_to_scroll);
        true
    }

    pub fn view_extent(&self) -> Extent {
        self.view_extent
    }

    pub fn visible_extent(&self) -> Extent {
        self.visible_extent
    }

    /// Resize the visible window, typically on every render
    pub fn set_visible_extent(&mut self, extent: Extent) {
        self.visible_extent = extent;
        self.sync_bounds();
    }

    pub fn scroll_units(&mut self, axis: Axis, units: i32) {
        self.bar_mut(axis).scroll_units(units);
    }

    pub fn scroll_blocks(&mut self, axis: Axis, blocks: i32) {
        self.bar_mut(axis).scroll_blocks(blocks);
    }

    pub fn jump_to_start(&mut self, axis: Axis) {
        self.bar_mut(axis).jump_to_start();
    }

    pub fn jump_to_end(&mut self, axis: Axis) {
        self.bar_mut(axis).jump_to_end();
    }

    pub fn reset(&mut self) {
        self.horizontal.jump_to_start();
        self.vertical.jump_to_start();
    }

    fn sync_bounds(&mut self) {
        for axis in Axis::ALL {
            let content = self.view_extent.along(axis);
            let visible = self.visible_extent.along(axis);
            self.bar_mut(axis).update_bounds(content, visible);
        }
    }
}

impl Default for ScrollPane {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for ScrollPane {
    fn value(&self, axis: Axis) -> i32 {
        self.bar(axis).value()
    }

    fn set_value(&mut self, axis: Axis, value: i32) {
        self.bar_mut(axis).set_value(value);
    }

    fn block_increment(&self, axis: Axis) -> i32 {
        self.bar(axis).block_increment
    }

    fn unit_increment(&self, axis: Axis) -> i32 {
        self.bar(axis).unit_increment
    }

    fn set_increments(&mut self, axis: Axis, step: ScrollStep) {
        let bar = self.bar_mut(axis);
        bar.block_increment = step.block();
        bar.unit_increment = step.unit();
    }

    fn set_wheel_scrolling_enabled(&mut self, enabled: bool) {
        self.wheel_scrolling_enabled = enabled;
    }

    fn set_view_extent(&mut self, extent: Extent) {
        self.view_extent = extent;
        self.sync_bounds();
    }
}

#[cfg(test)]
#[path = "scroll_pane_tests.rs"]
mod scroll_pane_tests;
