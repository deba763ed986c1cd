//! Repository port for persisting the task collection.

use crate::storage::StorageError;
use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Whole-collection task persistence contract.
///
/// The collection is always read and written as a unit; there are no
/// per-task writes.
pub trait TaskRepository: Send + Sync {
    /// Loads the stored collection.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Corrupt`] when stored data cannot be
    /// decoded, or [`TaskRepositoryError::Storage`] when the slot cannot be
    /// read.
    fn load(&self) -> TaskRepositoryResult<Option<Vec<Task>>>;

    /// Replaces the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the slot rejects the
    /// write, or [`TaskRepositoryError::Encoding`] when the collection cannot
    /// be serialized.
    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Stored task data is not a valid task collection.
    #[error("stored task data is unreadable: {0}")]
    Corrupt(Arc<dyn std::error::Error + Send + Sync>),

    /// The collection could not be serialized.
    #[error("task collection could not be encoded: {0}")]
    Encoding(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence slot failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TaskRepositoryError {
    /// Wraps a decoding failure.
    pub fn corrupt(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Corrupt(Arc::new(err))
    }

    /// Wraps an encoding failure.
    pub fn encoding(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Encoding(Arc::new(err))
    }
}
