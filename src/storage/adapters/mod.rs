//! Persistence slot adapters.
//!
//! - [`memory::InMemoryKeyValueStore`]: Shared in-process map, one handle per
//!   "tab" when cloned
//! - [`file::FileKeyValueStore`]: One UTF-8 file per key inside a directory

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
