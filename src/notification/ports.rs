//! Notifier port.

use super::Notification;
use std::sync::Arc;

/// Sink for user-visible notifications.
///
/// Notifying never fails from the caller's point of view; a sink that cannot
/// deliver drops the message.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
