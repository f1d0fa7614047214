//! Platform directory lookup.
//!
//! [`BaseDirs`] abstracts the per-user configuration directory so callers
//! can substitute a fixed location in tests.

use camino::Utf8PathBuf;
use directories_next::ProjectDirs;

/// Source of per-user directories.
#[cfg_attr(test, mockall::automock)]
pub trait BaseDirs {
    /// Directory holding polyglot's configuration and preference files.
    ///
    /// Returns `None` when the platform exposes no home directory or the
    /// path is not valid UTF-8.
    fn config_dir(&self) -> Option<Utf8PathBuf>;
}

/// [`BaseDirs`] backed by the platform conventions from `directories-next`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBaseDirs;

impl BaseDirs for SystemBaseDirs {
    fn config_dir(&self) -> Option<Utf8PathBuf> {
        let dirs = ProjectDirs::from("", "", "polyglot")?;
        Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
    }
}

/// [`BaseDirs`] returning a fixed directory, or none at all.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FixedBaseDirs {
    config_dir: Option<Utf8PathBuf>,
}

impl FixedBaseDirs {
    /// Report `config_dir` as the configuration directory.
    #[must_use]
    pub fn new(config_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// Report that no configuration directory exists.
    #[must_use]
    pub const fn none() -> Self {
        Self { config_dir: None }
    }
}

impl BaseDirs for FixedBaseDirs {
    fn config_dir(&self) -> Option<Utf8PathBuf> {
        self.config_dir.clone()
    }
}
