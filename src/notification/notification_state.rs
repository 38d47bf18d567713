//! Transient messages shown over the view
//!
//! Only one message is visible at a time; a new one replaces the old.

use std::time::{Duration, Instant};

use crate::theme::notification::{INFO, NotificationColors, WARNING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Feedback such as "Zoom 200%", visible for 1.5s
    #[default]
    Info,
    /// Config problems, visible for 10s
    Warning,
}

impl NotificationType {
    fn lifetime(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationType::Info => &INFO,
            NotificationType::Warning => &WARNING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    pub shown_at: Instant,
    pub lifetime: Duration,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            kind,
            shown_at: Instant::now(),
            lifetime: kind.lifetime(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.lifetime
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationType::Warning));
    }

    /// Drop the message once its lifetime has passed; true when one was dropped
    pub fn clear_if_expired(&mut self) -> bool {
        let expired = self.current.as_ref().is_some_and(Notification::is_expired);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
