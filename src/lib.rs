//! Configuration and start-up wiring for the polyglot locale resolver.
//!
//! The resolver itself lives in `polyglot-common`; this crate reads
//! `polyglot.toml`, locates the preference file, and connects the
//! file-backed store and the host environment to a
//! [`polyglot_common::i18n::LocaleResolver`].

pub mod bootstrap;
pub mod config;
pub mod dirs;

pub use bootstrap::{BootstrapError, open_resolver, open_resolver_with};
pub use config::{
    CONFIG_FILE_NAME, ConfigError, PREFERENCES_FILE_NAME, PolyglotConfig, PreferencesConfig,
    default_config_path,
};
pub use dirs::{BaseDirs, FixedBaseDirs, SystemBaseDirs};
