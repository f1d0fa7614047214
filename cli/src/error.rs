//! Error types for the `polyglot` CLI.
//!
//! Language errors carry a message already rendered in the active language
//! so the binary can print it verbatim.

use polyglot::{BootstrapError, ConfigError};
use polyglot_common::i18n::I18nError;
use thiserror::Error;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resolver could not be opened.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// The requested language is not supported.
    #[error("{message}")]
    Language {
        /// Localised explanation shown to the user.
        message: String,
        /// The rejected request.
        #[source]
        source: I18nError,
    },

    /// Output could not be encoded as JSON.
    #[error("failed to encode output")]
    Serialise(#[from] serde_json::Error),

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Rejected language codes exit with `2`, like other usage errors; every
    /// other failure exits with `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Language { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
