//! Key-value port backing all persisted application state.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence slot operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Well-known keys in the persistence slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Serialized array of task records.
    Tasks,
    /// Opaque session token, present iff a session is authenticated.
    Token,
    /// Last protected route visited while authenticated.
    LastRoute,
}

impl StorageKey {
    /// Every key the application writes.
    pub const ALL: [Self; 3] = [Self::Tasks, Self::Token, Self::LastRoute];

    /// Returns the key name as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Token => "token",
            Self::LastRoute => "lastRoute",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous string-valued storage keyed by [`StorageKey`].
///
/// Reads and writes complete before returning; there is no batching and no
/// cross-handle notification.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been written for the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the underlying medium fails.
    fn get(&self, key: StorageKey) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the underlying medium fails.
    fn set(&self, key: StorageKey, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the underlying medium fails.
    fn remove(&self, key: StorageKey) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Errors returned by persistence slot implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backing medium failed while accessing a key.
    #[error("storage backend error for key '{key}': {cause}")]
    Backend {
        /// Key being accessed.
        key: StorageKey,
        /// Underlying failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wraps a backend failure for the given key.
    pub fn backend(key: StorageKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend {
            key,
            cause: Arc::new(err),
        }
    }
}
