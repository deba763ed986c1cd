//! Tests for notification types and adapters.

use crate::notification::{
    Notification, NotificationKind, Notifier,
    adapters::{InMemoryNotifier, TracingNotifier},
};
use rstest::rstest;

#[rstest]
#[case(Notification::success("done"), NotificationKind::Success, "[success] done")]
#[case(Notification::error("nope"), NotificationKind::Error, "[error] nope")]
#[case(Notification::info("fyi"), NotificationKind::Info, "[info] fyi")]
fn constructors_set_kind(
    #[case] notification: Notification,
    #[case] kind: NotificationKind,
    #[case] rendered: &str,
) {
    assert_eq!(notification.kind(), kind);
    assert_eq!(notification.to_string(), rendered);
}

#[rstest]
fn in_memory_notifier_preserves_order_and_drains() {
    let notifier = InMemoryNotifier::new();
    notifier.notify(Notification::success("first"));
    notifier.notify(Notification::info("second"));

    assert_eq!(
        notifier.last().map(|n| n.message().to_owned()),
        Some("second".to_owned())
    );
    let drained = notifier.drain();
    assert_eq!(
        drained,
        vec![Notification::success("first"), Notification::info("second")]
    );
    assert!(notifier.snapshot().is_empty());
}

#[rstest]
fn tracing_notifier_accepts_every_kind() {
    let notifier = TracingNotifier;
    notifier.notify(Notification::success("saved"));
    notifier.notify(Notification::error("rejected"));
    notifier.notify(Notification::info("logged out"));
}
