//! Identifier allocation port.

use crate::task::domain::{Task, TaskId};

/// Allocates identifiers for newly created tasks.
///
/// Implementations must never return an identifier already present in
/// `existing`, and must not repeat an identifier they have issued before,
/// even when called many times within one clock tick.
pub trait TaskIdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self, existing: &[Task]) -> TaskId;
}
