//! Notification module for viewscroll
//!
//! Displays transient messages such as config warnings and zoom changes.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
