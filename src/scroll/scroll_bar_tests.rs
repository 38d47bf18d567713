//! Tests for ScrollBar

use super::*;

fn bar_with_bounds(content: usize, visible: usize) -> ScrollBar {
    let mut bar = ScrollBar::new();
    bar.update_bounds(content, visible);
    bar
}

#[test]
fn test_new_scroll_bar() {
    let bar = ScrollBar::new();
    assert_eq!(bar.value(), 0);
    assert_eq!(bar.maximum, 0);
    assert_eq!(bar.visible_amount, 0);
    assert_eq!(bar.block_increment, 10);
    assert_eq!(bar.unit_increment, 1);
}

#[test]
fn test_update_bounds_small_content() {
    // Content fits in the window
    let bar = bar_with_bounds(10, 20);
    assert_eq!(bar.max_value(), 0);
    assert!(!bar.is_scrollable());
}

#[test]
fn test_update_bounds_large_content() {
    let bar = bar_with_bounds(100, 20);
    assert_eq!(bar.max_value(), 80);
    assert!(bar.is_scrollable());
}

#[test]
fn test_update_bounds_clamps_value() {
    let mut bar = bar_with_bounds(100, 20);
    bar.set_value(80);

    bar.update_bounds(50, 20);
    assert_eq!(bar.max_value(), 30);
    assert_eq!(bar.value(), 30); // Clamped from 80 to 30
}

#[test]
fn test_update_bounds_huge_content_saturates() {
    let bar = bar_with_bounds(usize::MAX, 0);
    assert_eq!(bar.maximum, i32::MAX);
    assert_eq!(bar.max_value(), i32::MAX);
}

#[test]
fn test_set_value_clamps_both_ends() {
    let mut bar = bar_with_bounds(100, 20);

    bar.set_value(-15);
    assert_eq!(bar.value(), 0);

    bar.set_value(500);
    assert_eq!(bar.value(), 80);
}

#[test]
fn test_scroll_units_uses_unit_increment() {
    let mut bar = bar_with_bounds(100, 20);
    bar.unit_increment = 4;

    bar.scroll_units(2);
    assert_eq!(bar.value(), 8);

    bar.scroll_units(-1);
    assert_eq!(bar.value(), 4);
}

#[test]
fn test_scroll_blocks_uses_block_increment() {
    let mut bar = bar_with_bounds(100, 20);
    bar.block_increment = 25;

    bar.scroll_blocks(2);
    assert_eq!(bar.value(), 50);

    bar.scroll_blocks(5); // Past the end
    assert_eq!(bar.value(), 80);
}

#[test]
fn test_scroll_by_saturates_on_overflow() {
    let mut bar = bar_with_bounds(usize::MAX, 0);
    bar.set_value(i32::MAX - 1);

    bar.scroll_by(i32::MAX);
    assert_eq!(bar.value(), i32::MAX);
}

#[test]
fn test_jump_to_start_and_end() {
    let mut bar = bar_with_bounds(100, 20);

    bar.jump_to_end();
    assert_eq!(bar.value(), 80);

    bar.jump_to_start();
    assert_eq!(bar.value(), 0);
}

#[test]
fn test_default() {
    assert_eq!(ScrollBar::default(), ScrollBar::new());
}
