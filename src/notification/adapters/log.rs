//! Notifier that forwards to `tracing`.

use crate::notification::{Notification, NotificationKind, Notifier};

/// Emits every notification as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let text = notification.message();
        match notification.kind() {
            NotificationKind::Error => {
                tracing::warn!(kind = "error", text, "notification");
            }
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = notification.kind().as_str(), text, "notification");
            }
        }
    }
}
