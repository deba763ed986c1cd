//! Directory-backed persistence slot.
//!
//! Each key maps to a file named after the key inside a capability-scoped
//! directory, so the store can never touch paths outside the directory it
//! was opened with.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::storage::ports::{KeyValueStore, StorageError, StorageKey, StorageResult};

/// Returns the directory containing `path`, or `.` for a bare name such as
/// `data` whose parent is empty.
pub(crate) fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    }
}

/// Key-value store persisting one file per key.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens (creating if needed) the data directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> std::io::Result<Self> {
        let parent = parent_or_current(path);
        let name = path
            .file_name()
            .ok_or_else(|| std::io::Error::other("data directory path must include a name"))?;
        let parent_dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        parent_dir.create_dir_all(name)?;
        let dir = parent_dir.open_dir(name)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn file_name(key: StorageKey) -> String {
        format!("{}.txt", key.as_str())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(key, err)),
        }
    }

    fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        self.dir
            .write(Self::file_name(key), value)
            .map_err(|err| StorageError::backend(key, err))
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::backend(key, err)),
        }
    }
}
