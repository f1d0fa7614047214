//! Workspace configuration for polyglot.
//!
//! Settings live in `polyglot.toml`. Every field has a default, so a missing
//! file or an empty table is a valid configuration. Unknown keys are
//! rejected to catch typos early.
//!
//! ```toml
//! [preferences]
//! path = "/home/me/.config/polyglot/preferences.toml"
//! ```

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::dirs::BaseDirs;

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "polyglot.toml";

/// File name used for the preference store when no path is configured.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Failure raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration from {path}")]
    Read {
        /// Location of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid for [`PolyglotConfig`].
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Location of the configuration file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },

    /// No preference path is configured and the platform has no
    /// configuration directory to fall back to.
    #[error("no configuration directory is available; set `preferences.path` explicitly")]
    NoConfigDirectory,
}

/// Top-level contents of `polyglot.toml`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PolyglotConfig {
    /// Where the language preference is stored.
    pub preferences: PreferencesConfig,
}

/// The `[preferences]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesConfig {
    /// Explicit location of the preference file. When absent the file lives
    /// in the platform configuration directory.
    pub path: Option<Utf8PathBuf>,
}

impl PolyglotConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use polyglot::PolyglotConfig;
    ///
    /// let config = PolyglotConfig::load_from(Utf8Path::new("does/not/exist.toml"))
    ///     .expect("missing files fall back to defaults");
    /// assert_eq!(config, PolyglotConfig::default());
    /// ```
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |path| match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: path.to_owned(),
                source,
            }),
        })
    }

    /// Load configuration using the supplied reader.
    ///
    /// `reader` returns the raw file contents for `path`, or `None` when no
    /// file exists. Tests use this to supply configuration without touching
    /// the filesystem.
    ///
    /// # Errors
    ///
    /// Propagates errors from `reader` and returns [`ConfigError::Parse`]
    /// when the contents are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use polyglot::PolyglotConfig;
    ///
    /// let config = PolyglotConfig::load_with(Utf8Path::new("polyglot.toml"), |_| {
    ///     Ok(Some(String::from("[preferences]\npath = \"prefs.toml\"\n")))
    /// })
    /// .expect("valid configuration");
    /// assert_eq!(config.preferences.path.as_deref().map(|path| path.as_str()), Some("prefs.toml"));
    /// ```
    pub fn load_with<F>(path: &Utf8Path, reader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<Option<String>, ConfigError>,
    {
        let Some(contents) = reader(path)? else {
            debug!(target: "config", "no configuration at {path}; using defaults");
            return Ok(Self::default());
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Location of the preference file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDirectory`] when no path is configured
    /// and `dirs` cannot supply a configuration directory.
    pub fn preferences_path(&self, dirs: &dyn BaseDirs) -> Result<Utf8PathBuf, ConfigError> {
        if let Some(path) = &self.preferences.path {
            return Ok(path.clone());
        }

        dirs.config_dir()
            .map(|dir| dir.join(PREFERENCES_FILE_NAME))
            .ok_or(ConfigError::NoConfigDirectory)
    }
}

/// Default location of `polyglot.toml` inside the configuration directory.
#[must_use]
pub fn default_config_path(dirs: &dyn BaseDirs) -> Option<Utf8PathBuf> {
    dirs.config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
