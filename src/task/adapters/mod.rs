//! Adapters for task persistence and identifier allocation.
//!
//! - [`key_value::KeyValueTaskRepository`]: JSON collection stored under the
//!   `tasks` key of any persistence slot
//! - [`ids::MonotonicTaskIdGenerator`]: Clock-derived, strictly increasing ids
//! - [`ids::SequentialTaskIdGenerator`]: Counter-based ids for deterministic
//!   tests and tooling

pub mod ids;
pub mod key_value;

pub use ids::{MonotonicTaskIdGenerator, SequentialTaskIdGenerator};
pub use key_value::KeyValueTaskRepository;
