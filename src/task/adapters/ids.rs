//! Task identifier generators.

use std::sync::{Arc, Mutex, PoisonError};

use mockable::Clock;

use crate::task::{
    domain::{Task, TaskId},
    ports::TaskIdGenerator,
};

fn highest_existing(existing: &[Task]) -> u64 {
    existing
        .iter()
        .map(|task| task.id().value())
        .max()
        .unwrap_or(0)
}

/// Issues identifiers derived from the current time in milliseconds.
///
/// Each identifier is at least one greater than both the previous one issued
/// and the highest identifier already in the collection, so rapid successive
/// creation or a clock stepping backwards cannot produce a collision.
#[derive(Debug)]
pub struct MonotonicTaskIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    last_issued: Mutex<u64>,
}

impl<C> MonotonicTaskIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            last_issued: Mutex::new(0),
        }
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or(0)
    }
}

impl<C> TaskIdGenerator for MonotonicTaskIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    fn next_id(&self, existing: &[Task]) -> TaskId {
        let mut last = self
            .last_issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let floor = (*last).max(highest_existing(existing)).saturating_add(1);
        let issued = self.now_millis().max(floor);
        *last = issued;
        TaskId::new(issued)
    }
}

/// Issues consecutive identifiers starting after the highest one in use.
#[derive(Debug, Default)]
pub struct SequentialTaskIdGenerator {
    last_issued: Mutex<u64>,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator whose first identifier is 1 for an empty
    /// collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self, existing: &[Task]) -> TaskId {
        let mut last = self
            .last_issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let issued = (*last).max(highest_existing(existing)).saturating_add(1);
        *last = issued;
        TaskId::new(issued)
    }
}
