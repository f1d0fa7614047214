//! Wiring of production collaborators into a [`LocaleResolver`].

use log::{debug, warn};
use polyglot_common::i18n::{
    EnvironmentLocale, FilePreferences, I18nError, LocaleResolver, PreferenceStore,
    SystemEnvironment, UnavailablePreferences,
};
use thiserror::Error;

use crate::config::{ConfigError, PolyglotConfig};
use crate::dirs::BaseDirs;

/// Failure raised while opening a resolver.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The configuration could not be used to locate preferences.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The resolver refused to start.
    #[error(transparent)]
    I18n(#[from] I18nError),
}

/// Open a resolver backed by the configured preference file and the host
/// environment locale.
///
/// # Errors
///
/// Returns [`BootstrapError::I18n`] when a catalog is missing. When no
/// preference path can be determined the resolver still opens, with
/// persistence unavailable for the session.
pub fn open_resolver(
    config: &PolyglotConfig,
    dirs: &dyn BaseDirs,
) -> Result<LocaleResolver, BootstrapError> {
    open_resolver_with(config, dirs, &SystemEnvironment)
}

/// Open a resolver backed by the configured preference file and
/// `environment`.
///
/// # Errors
///
/// See [`open_resolver`].
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use polyglot::{FixedBaseDirs, PolyglotConfig, open_resolver_with};
/// use polyglot_common::i18n::{Language, StaticEnvironment};
///
/// let dir = tempfile::tempdir().expect("temporary directory");
/// let dirs = FixedBaseDirs::new(Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8"));
///
/// let resolver = open_resolver_with(&PolyglotConfig::default(), &dirs, &StaticEnvironment::new("pl-PL"))
///     .expect("resolver opens");
/// assert_eq!(resolver.active(), Language::Pl);
/// ```
pub fn open_resolver_with(
    config: &PolyglotConfig,
    dirs: &dyn BaseDirs,
    environment: &dyn EnvironmentLocale,
) -> Result<LocaleResolver, BootstrapError> {
    let resolver = LocaleResolver::initialise(preference_store(config, dirs)?, environment)?;
    Ok(resolver)
}

fn preference_store(
    config: &PolyglotConfig,
    dirs: &dyn BaseDirs,
) -> Result<Box<dyn PreferenceStore + Send>, BootstrapError> {
    match config.preferences_path(dirs) {
        Ok(path) => {
            debug!(target: "bootstrap", "using preferences at {path}");
            Ok(Box::new(FilePreferences::new(path)))
        }
        Err(error @ ConfigError::NoConfigDirectory) => {
            warn!(
                target: "bootstrap",
                "{error}; language changes will not be saved",
            );
            Ok(Box::new(UnavailablePreferences::new(error.to_string())))
        }
        Err(error) => Err(error.into()),
    }
}
