//! Application state container.
//!
//! [`TaskDeck`] is the one object a presentation layer holds. It owns the
//! task store and the session guard, receives every user intent, and hands
//! back a [`DashboardSnapshot`] to render. Failures never escape it: invalid
//! form input is returned for inline display, everything else becomes a
//! notification or a logged no-op.

mod deck;
mod snapshot;

pub use deck::{Selection, TaskDeck};
pub use snapshot::DashboardSnapshot;
