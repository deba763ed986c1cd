//! Notifier adapters.
//!
//! - [`memory::InMemoryNotifier`]: Queues notifications for the view to drain
//! - [`log::TracingNotifier`]: Emits each notification as a `tracing` event

pub mod log;
pub mod memory;

pub use log::TracingNotifier;
pub use memory::InMemoryNotifier;
