//! In-memory persistence slot.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueStore, StorageError, StorageKey, StorageResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same underlying map, which models several windows of one
/// browser profile writing to the same local storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    #[must_use]
    pub fn with_entries<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StorageKey, V)>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }
}

fn poisoned(key: StorageKey, err: &impl ToString) -> StorageError {
    StorageError::backend(key, std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| poisoned(key, &err))?;
        Ok(entries.get(&key).cloned())
    }

    fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(key, &err))?;
        entries.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(key, &err))?;
        entries.remove(&key);
        Ok(())
    }
}
