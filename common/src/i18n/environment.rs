//! Host locale detection.
//!
//! The resolver only ever sees the [`EnvironmentLocale`] trait. Production
//! code wires in [`SystemEnvironment`]; tests and embedders use
//! [`StaticEnvironment`].

use std::str::FromStr;

use super::LanguageIdentifier;

/// Environment variable that overrides the detected system locale.
pub const LOCALE_ENV: &str = "POLYGLOT_LOCALE";

/// Source of the host environment's preferred locale tag.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentLocale {
    /// Return a BCP 47-like tag such as `en-US`, if one is available.
    fn locale(&self) -> Option<String>;
}

/// Locale provider backed by [`LOCALE_ENV`] and then `sys-locale`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnvironment;

impl EnvironmentLocale for SystemEnvironment {
    fn locale(&self) -> Option<String> {
        std::env::var(LOCALE_ENV)
            .ok()
            .and_then(|raw| normalise_locale_tag(&raw))
            .or_else(|| sys_locale::get_locale().and_then(|raw| normalise_locale_tag(&raw)))
    }
}

/// Locale provider returning a fixed tag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticEnvironment {
    tag: Option<String>,
}

impl StaticEnvironment {
    /// Report `tag` as the environment locale.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
        }
    }

    /// Report no environment locale at all.
    #[must_use]
    pub const fn silent() -> Self {
        Self { tag: None }
    }
}

impl EnvironmentLocale for StaticEnvironment {
    fn locale(&self) -> Option<String> {
        self.tag.clone()
    }
}

/// Return the primary subtag of `tag`: everything before the first `-`.
///
/// ```
/// use polyglot_common::i18n::primary_subtag;
///
/// assert_eq!(primary_subtag("en-US"), "en");
/// assert_eq!(primary_subtag("pl"), "pl");
/// ```
#[must_use]
pub fn primary_subtag(tag: &str) -> &str {
    tag.split_once('-').map_or(tag, |(primary, _)| primary)
}

/// Normalise a POSIX or BCP 47 locale string into a language tag.
///
/// Encoding suffixes (`.UTF-8`) and modifiers (`@euro`) are stripped and
/// underscores become hyphens, so `de_DE.UTF-8` yields `de-DE`. Values that
/// do not parse as a language identifier yield `None`.
///
/// ```
/// use polyglot_common::i18n::normalise_locale_tag;
///
/// assert_eq!(normalise_locale_tag("de_DE.UTF-8").as_deref(), Some("de-DE"));
/// assert_eq!(normalise_locale_tag("  "), None);
/// ```
#[must_use]
pub fn normalise_locale_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        return None;
    }

    LanguageIdentifier::from_str(&stripped.replace('_', "-"))
        .ok()
        .map(|identifier| identifier.to_string())
}
