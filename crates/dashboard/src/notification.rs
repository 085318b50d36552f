//! Transient notification banner.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockboard_core::NotificationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

/// Holds at most one visible banner.
///
/// Showing a message replaces the current banner. Dismissal is by id, so a
/// timer started for an older banner never hides a newer one.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    shown: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, at: DateTime<Utc>) -> NotificationId {
        let notification = Notification {
            id: NotificationId::new(),
            message: message.into(),
            shown_at: at,
        };
        let id = notification.id;
        tracing::info!(notification_id = %id, message = %notification.message, "notification shown");
        self.current = Some(notification);
        self.shown += 1;
        id
    }

    /// Hide the banner if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                tracing::debug!(notification_id = %id, "notification dismissed");
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Total banners shown since start.
    pub fn shown_count(&self) -> u64 {
        self.shown
    }
}
