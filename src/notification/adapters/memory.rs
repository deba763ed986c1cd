//! Queue-backed notifier.

use std::sync::{Arc, Mutex, PoisonError};

use crate::notification::{Notification, Notifier};

/// Thread-safe notifier that records notifications in arrival order.
///
/// Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    queue: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every queued notification without consuming them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every queued notification.
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
