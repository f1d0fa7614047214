use std::borrow::Cow;
use std::collections::HashMap;

use fluent_templates::Loader;
use thiserror::Error;

use super::catalog::format_defined;
use super::{FluentValue, LOADER, Language};

/// HashMap wrapper used when passing Fluent arguments to lookups.
pub type Arguments<'a> = HashMap<Cow<'static, str>, FluentValue<'a>>;

/// Error raised when localisation data cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when a language code falls outside the supported set.
    #[error("unsupported language `{code}`")]
    InvalidLanguage { code: String },
    /// Raised when the requested message is missing from both the active and
    /// the default catalog.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage { key: String, locale: String },
    /// Raised when a catalog defines the message but Fluent could not format
    /// it cleanly, e.g. because an argument was not supplied. `partial` holds
    /// the text Fluent produced, with unresolved placeables left as
    /// `{$name}`.
    #[error("message `{key}` for locale `{locale}` could not be formatted: {reason}")]
    Format {
        key: String,
        locale: String,
        partial: String,
        reason: String,
    },
    /// Raised when a supported language has no embedded catalog.
    #[error("no catalog registered for language `{language}`")]
    MissingCatalog { language: Language },
}

/// Resolve localisation messages for a specific language.
///
/// Lookups consult the catalog for [`Localizer::language`] first and then
/// the default catalog, so a partially translated locale still renders
/// every message the default catalog knows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    /// Create a localizer for `language`.
    ///
    /// ```
    /// use polyglot_common::i18n::{Language, Localizer};
    ///
    /// let localizer = Localizer::new(Language::De);
    /// assert_eq!(localizer.locale(), "de");
    /// assert_eq!(localizer.message("language-name").as_deref(), Ok("Deutsch"));
    /// ```
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// Return the language this localizer renders.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Return the language code as a string slice.
    #[must_use]
    pub const fn locale(&self) -> &'static str {
        self.language.code()
    }

    /// Fetch the translated message for `key`.
    pub fn message(&self, key: &str) -> Result<String, I18nError> {
        self.lookup(key, None, None)
    }

    /// Fetch the translated message with Fluent arguments.
    pub fn message_with_args(&self, key: &str, args: &Arguments<'_>) -> Result<String, I18nError> {
        self.lookup(key, None, Some(args))
    }

    /// Fetch a translated attribute, e.g. `active-language.source`.
    pub fn attribute(&self, key: &str, attribute: &str) -> Result<String, I18nError> {
        self.lookup(key, Some(attribute), None)
    }

    /// Fetch a translated attribute with Fluent arguments.
    pub fn attribute_with_args(
        &self,
        key: &str,
        attribute: &str,
        args: &Arguments<'_>,
    ) -> Result<String, I18nError> {
        self.lookup(key, Some(attribute), Some(args))
    }

    fn lookup(
        &self,
        key: &str,
        attribute: Option<&str>,
        args: Option<&Arguments<'_>>,
    ) -> Result<String, I18nError> {
        let lookup_key = attribute.map_or_else(|| key.to_owned(), |attr| format!("{key}.{attr}"));
        let identifier = self.language.identifier();

        // The static loader walks the requested bundle and then the `en`
        // fallback bundle before giving up.
        let maybe_value = match args {
            Some(arguments) => {
                LOADER.try_lookup_with_args(&identifier, lookup_key.as_str(), arguments)
            }
            None => LOADER.try_lookup(&identifier, lookup_key.as_str()),
        };
        if let Some(value) = maybe_value {
            return Ok(value);
        }

        match format_defined(&[self.language, Language::DEFAULT], &lookup_key, args) {
            Some(partial) if partial.reason.is_empty() => Ok(partial.text),
            Some(partial) => Err(I18nError::Format {
                key: lookup_key,
                locale: partial.language.code().to_owned(),
                partial: partial.text,
                reason: partial.reason,
            }),
            None => Err(I18nError::MissingMessage {
                key: lookup_key,
                locale: self.language.code().to_owned(),
            }),
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(Language::DEFAULT)
    }
}
