//! Application configuration.
//!
//! Configuration is layered: an optional TOML file supplies the admin
//! credential and data directory, then `TASKDECK_*` environment variables
//! override individual values. The credential must be complete once every
//! layer has been applied.
//!
//! ```toml
//! data_dir = "/var/lib/taskdeck"
//!
//! [admin]
//! email = "admin@example.com"
//! password = "change-me"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::session::domain::AdminCredentials;
use crate::storage::{
    KeyValueStore, StorageKey, StorageResult,
    adapters::{FileKeyValueStore, InMemoryKeyValueStore, file::parent_or_current},
};

/// Environment variable overriding the admin email.
pub const ENV_ADMIN_EMAIL: &str = "TASKDECK_ADMIN_EMAIL";
/// Environment variable overriding the admin password.
pub const ENV_ADMIN_PASSWORD: &str = "TASKDECK_ADMIN_PASSWORD";
/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "TASKDECK_DATA_DIR";

/// Errors raised while assembling configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {cause}")]
    ReadFile {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        cause: Arc<std::io::Error>,
    },
    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    ParseToml(Arc<toml::de::Error>),
    /// A credential field was not supplied by any layer.
    #[error("missing admin {field}; set it in the configuration file or via {variable}")]
    MissingCredential {
        /// Name of the missing field.
        field: &'static str,
        /// Environment variable that can supply it.
        variable: &'static str,
    },
    /// The configured data directory could not be opened.
    #[error("failed to open data directory '{path}': {cause}")]
    DataDir {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        cause: Arc<std::io::Error>,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct AdminSection {
    email: Option<String>,
    password: Option<String>,
}

/// One partially specified configuration layer.
///
/// Every field is optional; [`ConfigLayer::into_config`] checks that the
/// credential is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    admin: AdminSection,
    data_dir: Option<Utf8PathBuf>,
}

impl ConfigLayer {
    /// Parses a layer from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        toml::from_str(text).map_err(|err| ConfigError::ParseToml(Arc::new(err)))
    }

    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when the file is missing or
    /// unreadable and [`ConfigError::ParseToml`] when it is malformed.
    pub fn read(path: &Utf8Path) -> ConfigResult<Self> {
        let read_error = |err: std::io::Error| ConfigError::ReadFile {
            path: path.to_owned(),
            cause: Arc::new(err),
        };
        let parent = parent_or_current(path);
        let name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::other("configuration path must name a file"))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let text = dir.read_to_string(name).map_err(read_error)?;
        Self::from_toml_str(&text)
    }

    /// Replaces fields with values returned by `lookup` for the `TASKDECK_*`
    /// variables. Unset and blank variables leave the field untouched.
    #[must_use]
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(email) = non_blank(&lookup, ENV_ADMIN_EMAIL) {
            self.admin.email = Some(email);
        }
        if let Some(password) = non_blank(&lookup, ENV_ADMIN_PASSWORD) {
            self.admin.password = Some(password);
        }
        if let Some(dir) = non_blank(&lookup, ENV_DATA_DIR) {
            self.data_dir = Some(Utf8PathBuf::from(dir));
        }
        self
    }

    /// Completes the layer into an [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the admin email or
    /// password is absent or blank.
    pub fn into_config(self) -> ConfigResult<AppConfig> {
        let email = require(self.admin.email, "email", ENV_ADMIN_EMAIL)?;
        let password = require(self.admin.password, "password", ENV_ADMIN_PASSWORD)?;
        Ok(AppConfig {
            admin: AdminCredentials::new(email, password),
            data_dir: self.data_dir,
        })
    }
}

fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|found| !found.trim().is_empty())
}

fn require(
    value: Option<String>,
    field: &'static str,
    variable: &'static str,
) -> ConfigResult<String> {
    value
        .filter(|found| !found.trim().is_empty())
        .ok_or(ConfigError::MissingCredential { field, variable })
}

/// Complete configuration for one Taskdeck instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    admin: AdminCredentials,
    data_dir: Option<Utf8PathBuf>,
}

impl AppConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(admin: AdminCredentials, data_dir: Option<Utf8PathBuf>) -> Self {
        Self { admin, data_dir }
    }

    /// Parses a complete configuration from TOML text with no overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] for malformed input and
    /// [`ConfigError::MissingCredential`] when the credential is incomplete.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        ConfigLayer::from_toml_str(text)?.into_config()
    }

    /// Loads configuration from `path` (when given) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load_with`].
    pub fn load(path: Option<&Utf8Path>) -> ConfigResult<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Loads configuration from `path` (when given) and overrides resolved
    /// through `lookup`.
    ///
    /// Without a path only the overrides contribute, so a missing file is an
    /// error only when one was explicitly requested.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] or [`ConfigError::ParseToml`] for an
    /// unusable file and [`ConfigError::MissingCredential`] when no layer
    /// supplies the credential.
    pub fn load_with<F>(path: Option<&Utf8Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match path {
            Some(file) => ConfigLayer::read(file)?,
            None => ConfigLayer::default(),
        };
        let config = base.apply_env_overrides(lookup).into_config()?;
        tracing::debug!(
            admin = config.admin.email(),
            data_dir = ?config.data_dir,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Applies `TASKDECK_*` overrides on top of a complete configuration.
    #[must_use]
    pub fn apply_env_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut admin = self.admin;
        if let Some(email) = non_blank(&lookup, ENV_ADMIN_EMAIL) {
            admin = admin.with_email(email);
        }
        if let Some(password) = non_blank(&lookup, ENV_ADMIN_PASSWORD) {
            admin = admin.with_password(password);
        }
        let data_dir = non_blank(&lookup, ENV_DATA_DIR)
            .map(Utf8PathBuf::from)
            .or(self.data_dir);
        Self { admin, data_dir }
    }

    /// Returns the admin credential.
    #[must_use]
    pub const fn admin(&self) -> &AdminCredentials {
        &self.admin
    }

    /// Returns the data directory, if persistence to disk is configured.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Utf8Path> {
        self.data_dir.as_deref()
    }

    /// Opens the persistence slot this configuration selects: a directory
    /// store when a data directory is set, otherwise an in-memory one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DataDir`] when the directory cannot be created
    /// or opened.
    pub fn open_store(&self) -> ConfigResult<ConfiguredStore> {
        match &self.data_dir {
            Some(path) => FileKeyValueStore::open(path)
                .map(ConfiguredStore::File)
                .map_err(|err| ConfigError::DataDir {
                    path: path.clone(),
                    cause: Arc::new(err),
                }),
            None => Ok(ConfiguredStore::Memory(InMemoryKeyValueStore::new())),
        }
    }
}

/// Persistence slot chosen by [`AppConfig::open_store`].
#[derive(Debug)]
pub enum ConfiguredStore {
    /// Volatile store; state is lost when the process exits.
    Memory(InMemoryKeyValueStore),
    /// One file per key inside the configured data directory.
    File(FileKeyValueStore),
}

impl KeyValueStore for ConfiguredStore {
    fn get(&self, key: StorageKey) -> StorageResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&self, key: StorageKey, value: &str) -> StorageResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::File(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::File(store) => store.remove(key),
        }
    }
}
