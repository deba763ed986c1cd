//! Task repository over the key-value persistence slot.

use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageKey};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Stores the task collection as a JSON array under [`StorageKey::Tasks`].
#[derive(Debug, Clone)]
pub struct KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    /// Creates a repository over the given slot.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> TaskRepository for KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    fn load(&self) -> TaskRepositoryResult<Option<Vec<Task>>> {
        let Some(raw) = self.store.get(StorageKey::Tasks)? else {
            return Ok(None);
        };
        let tasks: Vec<Task> = serde_json::from_str(&raw).map_err(TaskRepositoryError::corrupt)?;
        Ok(Some(tasks))
    }

    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let encoded = serde_json::to_string(tasks).map_err(TaskRepositoryError::encoding)?;
        self.store.set(StorageKey::Tasks, &encoded)?;
        Ok(())
    }
}
