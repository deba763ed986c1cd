//! User-visible notifications.
//!
//! Core operations report their outcome as short toast-style messages with a
//! kind. The core only emits them; showing, stacking, and expiring them is
//! left to whatever implements [`Notifier`].

pub mod adapters;
mod domain;
mod ports;

pub use domain::{Notification, NotificationKind};
pub use ports::Notifier;

#[cfg(test)]
mod tests;
