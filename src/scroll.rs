mod scroll_bar;
mod scroll_pane;
mod scroll_step;
mod viewport;

pub use scroll_bar::ScrollBar;
pub use scroll_pane::ScrollPane;
pub use scroll_step::ScrollStep;
pub use viewport::{Axis, Extent, ViewContent, Viewport};
