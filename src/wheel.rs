mod view_scroller;
mod wheel_event;

pub use view_scroller::{ViewScroller, WheelOutcome, ZOOM_IN, ZOOM_OUT, ZoomObserver, ZoomSignal};
pub use wheel_event::WheelEvent;
