//! The closed set of languages polyglot ships catalogs for.

use std::fmt;
use std::str::FromStr;

use unic_langid::langid;

use super::{I18nError, LanguageIdentifier};

/// A language with an embedded catalog.
///
/// The set is fixed at build time. Parsing is an exact, case-sensitive match
/// on the language code; `"de"` parses, `" de"` and `"DE"` do not.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Language {
    /// English, the default language.
    En,
    /// German.
    De,
    /// Polish.
    Pl,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Self; 3] = [Self::En, Self::De, Self::Pl];

    /// Language used when neither the preference nor the environment yields
    /// a supported value, and whose catalog backs missing keys.
    pub const DEFAULT: Self = Self::En;

    /// Return the language code stored in preferences and catalogs.
    ///
    /// ```
    /// use polyglot_common::i18n::Language;
    ///
    /// assert_eq!(Language::Pl.code(), "pl");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Pl => "pl",
        }
    }

    /// Return the Fluent language identifier for the catalog lookup.
    #[must_use]
    pub fn identifier(self) -> LanguageIdentifier {
        match self {
            Self::En => langid!("en"),
            Self::De => langid!("de"),
            Self::Pl => langid!("pl"),
        }
    }

    /// Whether this is [`Language::DEFAULT`].
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::DEFAULT)
    }

    /// Comma-separated list of every supported code, for user-facing hints.
    #[must_use]
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|language| language.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| I18nError::InvalidLanguage {
                code: code.to_owned(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}
