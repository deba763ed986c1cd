//! Navigator adapters.
//!
//! - [`memory::InMemoryNavigator`]: Records the current location and the
//!   full navigation history

pub mod memory;

pub use memory::InMemoryNavigator;
