//! Durable storage for the language preference.
//!
//! [`PreferenceStore`] is a small string key/value interface. The resolver
//! reads [`LANGUAGE_KEY`] once at start-up and writes it on every change.
//! [`FilePreferences`] keeps the values in a TOML file and replaces it
//! atomically so an interrupted write never leaves a truncated file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Preference key holding the selected language code.
pub const LANGUAGE_KEY: &str = "language";

/// Failure raised by a [`PreferenceStore`].
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The preference file exists but could not be read.
    #[error("failed to read preferences from {path}")]
    Read {
        /// Location of the preference file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The preference file could not be written.
    #[error("failed to write preferences to {path}")]
    Write {
        /// Location of the preference file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The preference file is not valid TOML.
    #[error("preferences at {path} are not valid TOML")]
    Parse {
        /// Location of the preference file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },

    /// The values could not be encoded as TOML.
    #[error("failed to encode preferences")]
    Serialise(#[from] toml::ser::Error),

    /// The backing storage is disabled or otherwise unreachable.
    #[error("preference storage unavailable: {reason}")]
    Unavailable {
        /// Description of why the store cannot be used.
        reason: String,
    },
}

/// String key/value storage that survives process restarts.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Return the value stored under `key`, or `None` when it was never set.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local store used for embedding and tests.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single `key = value` entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store used when no storage location can be determined.
///
/// Every read and write fails with [`PreferenceError::Unavailable`], so the
/// resolver starts without a stored preference and keeps runtime changes for
/// the session only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnavailablePreferences {
    reason: String,
}

impl UnavailablePreferences {
    /// Create a store that reports `reason` on every access.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> PreferenceError {
        PreferenceError::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

impl PreferenceStore for UnavailablePreferences {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(self.error())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(self.error())
    }
}

/// Preferences stored as a flat TOML table on disk.
///
/// ```
/// use camino::Utf8PathBuf;
/// use polyglot_common::i18n::{FilePreferences, PreferenceStore};
///
/// let dir = tempfile::tempdir().expect("temporary directory");
/// let path = Utf8PathBuf::from_path_buf(dir.path().join("prefs.toml")).expect("UTF-8 path");
///
/// let mut store = FilePreferences::new(path.clone());
/// store.set("language", "pl").expect("write succeeds");
///
/// let reopened = FilePreferences::new(path);
/// assert_eq!(reopened.get("language").expect("read succeeds").as_deref(), Some("pl"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilePreferences {
    path: Utf8PathBuf,
}

impl FilePreferences {
    /// Use the TOML file at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn load(&self) -> Result<toml::Table, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(toml::Table::new());
            }
            Err(source) => {
                return Err(PreferenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn store(&self, table: &toml::Table) -> Result<(), PreferenceError> {
        let encoded = toml::to_string(table)?;
        let write_error = |source: io::Error| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };

        let directory = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        fs::create_dir_all(directory).map_err(write_error)?;

        let mut staged = NamedTempFile::new_in(directory).map_err(write_error)?;
        staged.write_all(encoded.as_bytes()).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged
            .persist(&self.path)
            .map_err(|error| write_error(error.error))?;

        debug!(target: "i18n::persistence", "wrote preferences to {}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let table = self.load()?;
        Ok(table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_owned))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut table = match self.load() {
            Ok(table) => table,
            Err(error @ PreferenceError::Parse { .. }) => {
                warn!(
                    target: "i18n::persistence",
                    "{error}; replacing the file with fresh preferences",
                );
                toml::Table::new()
            }
            Err(error) => return Err(error),
        };

        table.insert(key.to_owned(), toml::Value::String(value.to_owned()));
        self.store(&table)
    }
}
