//! Local key-value persistence slot.
//!
//! Every piece of durable state (the task collection, the session token, and
//! the last visited protected route) lives under its own independent key in a
//! single string-valued store. Writers do not coordinate: two handles sharing
//! one slot race, and the last write wins.
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

pub use ports::{KeyValueStore, StorageError, StorageKey, StorageResult};
