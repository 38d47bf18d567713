/// Bounded offset along one axis
///
/// `value` always stays within `0..=max_value()`, where the upper bound is
/// the part of the content that does not fit in the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBar {
    value: i32,
    pub maximum: i32,
    pub visible_amount: i32,
    pub block_increment: i32,
    pub unit_increment: i32,
}

impl ScrollBar {
    /// Container defaults before any caller configures the bar
    pub const DEFAULT_BLOCK_INCREMENT: i32 = 10;
    pub const DEFAULT_UNIT_INCREMENT: i32 = 1;

    pub fn new() -> Self {
        Self {
            value: 0,
            maximum: 0,
            visible_amount: 0,
            block_increment: Self::DEFAULT_BLOCK_INCREMENT,
            unit_increment: Self::DEFAULT_UNIT_INCREMENT,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn max_value(&self) -> i32 {
        self.maximum.saturating_sub(self.visible_amount).max(0)
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(0, self.max_value());
    }

    pub fn update_bounds(&mut self, content_len: usize, visible_len: usize) {
        self.maximum = to_offset(content_len);
        self.visible_amount = to_offset(visible_len);
        self.set_value(self.value);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.set_value(self.value.saturating_add(delta));
    }

    pub fn scroll_units(&mut self, units: i32) {
        self.scroll_by(self.unit_increment.saturating_mul(units));
    }

    pub fn scroll_blocks(&mut self, blocks: i32) {
        self.scroll_by(self.block_increment.saturating_mul(blocks));
    }

    pub fn jump_to_start(&mut self) {
        self.value = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.value = self.max_value();
    }

    /// True when the content is larger than the visible window
    pub fn is_scrollable(&self) -> bool {
        self.max_value() > 0
    }
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Offsets are i32; lengths beyond that range saturate
fn to_offset(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "scroll_bar_tests.rs"]
mod scroll_bar_tests;
