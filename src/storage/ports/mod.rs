//! Port contracts for the persistence slot.

pub mod key_value;

pub use key_value::{KeyValueStore, StorageError, StorageKey, StorageResult};
