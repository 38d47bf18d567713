//! Tests for ViewScroller wheel routing

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::scroll::Extent;

type Received = Rc<RefCell<Vec<ZoomSignal>>>;

/// Large enough that 50 * units never hits a boundary in these tests
const ROOMY: Extent = Extent {
    width: 1_000_000,
    height: 1_000_000,
};
const START: i32 = 500_000;

struct Page(Extent);

impl ViewContent for Page {
    fn extent(&self) -> Extent {
        self.0
    }
}

fn recorder() -> (Received, impl FnMut(ZoomSignal) + 'static) {
    let received: Received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    (received, move |signal| sink.borrow_mut().push(signal))
}

fn roomy_scroller() -> (ViewScroller, Received) {
    let (received, observer) = recorder();
    let mut scroller = ViewScroller::with_view(ScrollPane::new(), &Page(ROOMY), observer);
    scroller.viewport_mut().set_value(Axis::Horizontal, START);
    scroller.viewport_mut().set_value(Axis::Vertical, START);
    (scroller, received)
}

fn offsets(scroller: &ViewScroller) -> (i32, i32) {
    (
        scroller.viewport().value(Axis::Horizontal),
        scroller.viewport().value(Axis::Vertical),
    )
}

#[test]
fn test_construction_configures_both_axes() {
    let scroller = ViewScroller::new(ScrollPane::new());
    for axis in Axis::ALL {
        assert_eq!(scroller.viewport().block_increment(axis), 50);
        assert_eq!(scroller.viewport().unit_increment(axis), 10);
    }
}

#[test]
fn test_construction_disables_builtin_wheel() {
    let scroller = ViewScroller::new(ScrollPane::new());
    assert!(!scroller.viewport().is_wheel_scrolling_enabled());
    assert!(!scroller.has_observer());
}

#[test]
fn test_with_step_overrides_increments() {
    let step = ScrollStep::new(20, 2).unwrap();
    let scroller = ViewScroller::with_step(ScrollPane::new(), step);
    assert_eq!(scroller.viewport().block_increment(Axis::Horizontal), 20);
    assert_eq!(scroller.viewport().unit_increment(Axis::Vertical), 2);
}

#[test]
fn test_with_view_sets_range_and_observer() {
    let (_received, observer) = recorder();
    let page = Page(Extent::new(80, 400));
    let scroller = ViewScroller::with_view(ScrollPane::new(), &page, observer);
    assert_eq!(scroller.viewport().view_extent(), Extent::new(80, 400));
    assert!(scroller.has_observer());
}

#[test]
fn test_plain_wheel_scrolls_vertically() {
    let (mut scroller, received) = roomy_scroller();

    let outcome = scroller.handle_wheel(&WheelEvent::new(1, 3));

    assert_eq!(
        outcome,
        WheelOutcome::Scroll {
            axis: Axis::Vertical,
            from: START,
            to: START + 150,
        }
    );
    assert_eq!(offsets(&scroller), (START, START + 150));
    assert!(received.borrow().is_empty());
}

#[test]
fn test_shift_wheel_scrolls_horizontally() {
    let (mut scroller, _received) = roomy_scroller();

    scroller.handle_wheel(&WheelEvent::new(-1, -3).with_shift());

    assert_eq!(offsets(&scroller), (START - 150, START));
}

#[test]
fn test_ctrl_wheel_down_zooms_out() {
    let (mut scroller, received) = roomy_scroller();

    let outcome = scroller.handle_wheel(&WheelEvent::new(1, 3).with_ctrl());

    assert_eq!(outcome, WheelOutcome::Zoom(ZoomSignal::ZoomOut));
    assert_eq!(*received.borrow(), vec![ZoomSignal::ZoomOut]);
    assert_eq!(offsets(&scroller), (START, START));
}

#[test]
fn test_ctrl_wheel_up_zooms_in() {
    let (mut scroller, received) = roomy_scroller();

    scroller.handle_wheel(&WheelEvent::new(-1, -3).with_ctrl());

    assert_eq!(*received.borrow(), vec![ZoomSignal::ZoomIn]);
}

#[test]
fn test_ctrl_zero_rotation_zooms_in() {
    let (mut scroller, received) = roomy_scroller();

    scroller.handle_wheel(&WheelEvent::new(0, 0).with_ctrl());

    assert_eq!(*received.borrow(), vec![ZoomSignal::ZoomIn]);
}

#[test]
fn test_ctrl_takes_precedence_over_shift() {
    let (mut scroller, received) = roomy_scroller();

    let outcome = scroller.handle_wheel(&WheelEvent::new(1, 3).with_ctrl().with_shift());

    assert_eq!(outcome, WheelOutcome::Zoom(ZoomSignal::ZoomOut));
    assert_eq!(received.borrow().len(), 1);
    assert_eq!(offsets(&scroller), (START, START));
}

#[test]
fn test_zoom_without_observer_is_noop() {
    let mut scroller = ViewScroller::new(ScrollPane::new());

    let outcome = scroller.handle_wheel(&WheelEvent::new(1, 3).with_ctrl());

    assert_eq!(outcome, WheelOutcome::Zoom(ZoomSignal::ZoomOut));
    assert_eq!(offsets(&scroller), (0, 0));
}

#[test]
fn test_replacing_observer_notifies_only_new_one() {
    let (first, first_observer) = recorder();
    let (second, second_observer) = recorder();
    let mut scroller = ViewScroller::with_observer(ScrollPane::new(), first_observer);

    scroller.handle_wheel(&WheelEvent::new(1, 1).with_ctrl());
    scroller.set_observer(second_observer);
    scroller.handle_wheel(&WheelEvent::new(-1, -1).with_ctrl());

    assert_eq!(*first.borrow(), vec![ZoomSignal::ZoomOut]);
    assert_eq!(*second.borrow(), vec![ZoomSignal::ZoomIn]);
}

#[test]
fn test_clear_observer_stops_notifications() {
    let (mut scroller, received) = roomy_scroller();

    scroller.clear_observer();
    scroller.handle_wheel(&WheelEvent::new(1, 1).with_ctrl());

    assert!(!scroller.has_observer());
    assert!(received.borrow().is_empty());
}

#[test]
fn test_scroll_is_clamped_by_container() {
    let mut scroller = ViewScroller::new(ScrollPane::new());
    scroller.set_view(&Page(Extent::new(10, 120)));
    scroller
        .viewport_mut()
        .set_visible_extent(Extent::new(10, 20));

    let outcome = scroller.handle_wheel(&WheelEvent::new(1, 3));
    assert_eq!(
        outcome,
        WheelOutcome::Scroll {
            axis: Axis::Vertical,
            from: 0,
            to: 100,
        }
    );

    scroller.handle_wheel(&WheelEvent::new(-1, -3));
    assert_eq!(scroller.viewport().value(Axis::Vertical), 0);
}

#[test]
fn test_signal_strings() {
    assert_eq!(ZoomSignal::ZoomIn.as_str(), "zoomIn");
    assert_eq!(ZoomSignal::ZoomOut.as_str(), "zoomOut");
    assert_eq!(ZoomSignal::ZoomOut.to_string(), ZOOM_OUT);
}

#[test]
fn test_emit_reaches_observer() {
    let (mut scroller, received) = roomy_scroller();

    scroller.emit(ZoomSignal::ZoomIn);
    scroller.emit(ZoomSignal::ZoomOut);

    assert_eq!(
        *received.borrow(),
        vec![ZoomSignal::ZoomIn, ZoomSignal::ZoomOut]
    );
}

#[test]
fn test_debug_hides_observer() {
    let (scroller, _received) = roomy_scroller();
    let debug = format!("{:?}", scroller);
    assert!(debug.contains("has_observer: true"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_ctrl_positive_rotation_zooms_out(rotation in 1i32..20, lines in 1i32..10, shift in any::<bool>()) {
        let (mut scroller, received) = roomy_scroller();
        let mut event = WheelEvent::new(rotation, rotation * lines).with_ctrl();
        event.shift = shift;

        scroller.handle_wheel(&event);

        prop_assert_eq!(received.borrow().clone(), vec![ZoomSignal::ZoomOut]);
        prop_assert_eq!(offsets(&scroller), (START, START));
    }

    #[test]
    fn prop_ctrl_non_positive_rotation_zooms_in(rotation in -20i32..=0, lines in 1i32..10, shift in any::<bool>()) {
        let (mut scroller, received) = roomy_scroller();
        let mut event = WheelEvent::new(rotation, rotation * lines).with_ctrl();
        event.shift = shift;

        scroller.handle_wheel(&event);

        prop_assert_eq!(received.borrow().clone(), vec![ZoomSignal::ZoomIn]);
        prop_assert_eq!(offsets(&scroller), (START, START));
    }

    #[test]
    fn prop_shift_moves_only_horizontal(units in -100i32..100) {
        let (mut scroller, received) = roomy_scroller();

        scroller.handle_wheel(&WheelEvent::new(units.signum(), units).with_shift());

        prop_assert_eq!(offsets(&scroller), (START + 50 * units, START));
        prop_assert!(received.borrow().is_empty());
    }

    #[test]
    fn prop_plain_wheel_moves_only_vertical(units in -100i32..100) {
        let (mut scroller, received) = roomy_scroller();

        scroller.handle_wheel(&WheelEvent::new(units.signum(), units));

        prop_assert_eq!(offsets(&scroller), (START, START + 50 * units));
        prop_assert!(received.borrow().is_empty());
    }

    #[test]
    fn prop_zoom_without_observer_changes_nothing(rotation in -20i32..20) {
        let mut scroller = ViewScroller::new(ScrollPane::new());
        scroller.set_view(&Page(ROOMY));
        scroller.viewport_mut().set_value(Axis::Vertical, START);

        scroller.handle_wheel(&WheelEvent::new(rotation, rotation * 3).with_ctrl());

        prop_assert_eq!(offsets(&scroller), (0, START));
    }
}
