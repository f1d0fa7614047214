use std::fmt;

use log::{debug, warn};

use super::{
    EnvironmentLocale, LANGUAGE_KEY, Language, Localizer, PreferenceStore, primary_subtag,
};

/// Source for a resolved language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// Language read from the preference store.
    PersistedPreference,
    /// Primary subtag of the host environment locale.
    EnvironmentLocale,
    /// Built-in default used when no candidate was valid.
    Fallback,
    /// Language chosen through the resolver after start-up.
    RuntimeChange,
}

impl LocaleSource {
    /// Catalog key describing this source to users.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::PersistedPreference => "source-persisted",
            Self::EnvironmentLocale => "source-environment",
            Self::Fallback => "source-fallback",
            Self::RuntimeChange => "source-runtime",
        }
    }
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersistedPreference => formatter.write_str("persisted preference"),
            Self::EnvironmentLocale => formatter.write_str("environment locale"),
            Self::Fallback => formatter.write_str("fallback language"),
            Self::RuntimeChange => formatter.write_str("runtime change"),
        }
    }
}

/// Outcome of language resolution including the localizer and provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocaleSelection {
    localizer: Localizer,
    source: LocaleSource,
    requested: Option<String>,
}

impl LocaleSelection {
    const fn new(localizer: Localizer, source: LocaleSource, requested: Option<String>) -> Self {
        Self {
            localizer,
            source,
            requested,
        }
    }

    /// Returns the effective locale source.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Returns the raw value offered by the winning source, if any.
    ///
    /// For the environment this is the full tag (`de-DE`), not the subtag.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    /// Returns the resolved language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.localizer.language()
    }

    /// Returns the resolved language code.
    #[must_use]
    pub const fn locale(&self) -> &'static str {
        self.localizer.locale()
    }

    /// Whether the built-in default was used because nothing else matched.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.source == LocaleSource::Fallback
    }

    /// Returns the resolved [`Localizer`].
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Consumes the selection, yielding the [`Localizer`].
    #[must_use]
    pub fn into_localizer(self) -> Localizer {
        self.localizer
    }

    /// Emit a debug log summarising the resolved language.
    pub fn log_outcome(&self, target: &str) {
        debug!(
            target: target,
            "resolved {} to `{}`",
            self.source(),
            self.locale(),
        );
    }
}

fn read_preference(store: &dyn PreferenceStore) -> Option<String> {
    store.get(LANGUAGE_KEY).unwrap_or_else(|error| {
        warn!(
            target: "i18n::selection",
            "could not read the stored language: {error}; treating it as unset",
        );
        None
    })
}

/// Attempt to resolve a language candidate offered by `source`.
///
/// `candidate` is the text compared against the supported codes; `raw` is
/// what the source reported and is kept for diagnostics.
fn try_resolve_candidate(
    source: LocaleSource,
    raw: &str,
    candidate: &str,
) -> Option<LocaleSelection> {
    match candidate.parse::<Language>() {
        Ok(language) => Some(LocaleSelection::new(
            Localizer::new(language),
            source,
            Some(raw.to_owned()),
        )),
        Err(_) => {
            warn!(
                target: "i18n::selection",
                "skipping unsupported {source} `{raw}`",
            );
            None
        }
    }
}

/// Resolve the active language from persistence, environment, and default.
///
/// Candidates are considered in this order:
///
/// 1. The value stored under [`LANGUAGE_KEY`], matched exactly. A read
///    failure counts as no stored value.
/// 2. The primary subtag of the environment locale (`de` from `de-DE`).
/// 3. [`Language::DEFAULT`].
///
/// The environment is only queried when the stored value is absent or
/// unsupported.
///
/// ```
/// use polyglot_common::i18n::{
///     LANGUAGE_KEY, Language, LocaleSource, MemoryPreferences, StaticEnvironment,
///     resolve_language,
/// };
///
/// let store = MemoryPreferences::with_value(LANGUAGE_KEY, "de");
/// let selection = resolve_language(&store, &StaticEnvironment::new("pl-PL"));
/// assert_eq!(selection.language(), Language::De);
/// assert_eq!(selection.source(), LocaleSource::PersistedPreference);
/// ```
#[must_use]
pub fn resolve_language(
    store: &dyn PreferenceStore,
    environment: &dyn EnvironmentLocale,
) -> LocaleSelection {
    if let Some(selection) = read_preference(store).and_then(|stored| {
        try_resolve_candidate(LocaleSource::PersistedPreference, &stored, &stored)
    }) {
        return selection;
    }

    environment
        .locale()
        .and_then(|tag| {
            try_resolve_candidate(LocaleSource::EnvironmentLocale, &tag, primary_subtag(&tag))
        })
        .unwrap_or_else(|| {
            LocaleSelection::new(Localizer::default(), LocaleSource::Fallback, None)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::environment::MockEnvironmentLocale;
    use crate::i18n::persistence::MockPreferenceStore;
    use crate::i18n::testing::FlakyPreferences;
    use crate::i18n::{MemoryPreferences, StaticEnvironment};
    use rstest::rstest;

    #[rstest]
    #[case(Some("de"), Some("pl-PL"), LocaleSource::PersistedPreference, Language::De)]
    #[case(None, Some("fr-FR"), LocaleSource::Fallback, Language::En)]
    #[case(None, Some("de-DE"), LocaleSource::EnvironmentLocale, Language::De)]
    #[case(None, Some("pl"), LocaleSource::EnvironmentLocale, Language::Pl)]
    #[case(None, None, LocaleSource::Fallback, Language::En)]
    #[case(Some("klingon"), Some("pl-PL"), LocaleSource::EnvironmentLocale, Language::Pl)]
    #[case(Some(" de"), None, LocaleSource::Fallback, Language::En)]
    #[case(Some("de-DE"), None, LocaleSource::Fallback, Language::En)]
    #[case(None, Some("DE-de"), LocaleSource::Fallback, Language::En)]
    fn resolves_sources(
        #[case] stored: Option<&str>,
        #[case] environment: Option<&str>,
        #[case] expected_source: LocaleSource,
        #[case] expected_language: Language,
    ) {
        let store = stored.map_or_else(MemoryPreferences::new, |value| {
            MemoryPreferences::with_value(LANGUAGE_KEY, value)
        });
        let environment = environment.map_or_else(StaticEnvironment::silent, StaticEnvironment::new);

        let selection = resolve_language(&store, &environment);

        assert_eq!(selection.source(), expected_source);
        assert_eq!(selection.language(), expected_language);
        assert_eq!(
            selection.used_fallback(),
            expected_source == LocaleSource::Fallback
        );
    }

    #[rstest]
    fn records_the_raw_environment_tag() {
        let selection =
            resolve_language(&MemoryPreferences::new(), &StaticEnvironment::new("de-AT"));

        assert_eq!(selection.requested(), Some("de-AT"));
        assert_eq!(selection.locale(), "de");
    }

    #[rstest]
    fn read_failures_fall_through_to_the_environment() {
        let store = FlakyPreferences::unavailable();

        let selection = resolve_language(&store, &StaticEnvironment::new("pl-PL"));

        assert_eq!(selection.source(), LocaleSource::EnvironmentLocale);
        assert_eq!(selection.language(), Language::Pl);
    }

    #[rstest]
    fn environment_is_not_consulted_when_the_preference_is_valid() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(String::from("pl"))));
        let mut environment = MockEnvironmentLocale::new();
        environment.expect_locale().never();

        let selection = resolve_language(&store, &environment);

        assert_eq!(selection.language(), Language::Pl);
    }

    #[rstest]
    fn fallback_selection_has_no_requested_value() {
        let selection =
            resolve_language(&MemoryPreferences::new(), &StaticEnvironment::silent());

        assert_eq!(selection.requested(), None);
        assert_eq!(selection.into_localizer().language(), Language::DEFAULT);
    }

    #[rstest]
    #[case(LocaleSource::PersistedPreference, "source-persisted")]
    #[case(LocaleSource::EnvironmentLocale, "source-environment")]
    #[case(LocaleSource::Fallback, "source-fallback")]
    #[case(LocaleSource::RuntimeChange, "source-runtime")]
    fn sources_map_to_catalog_keys(#[case] source: LocaleSource, #[case] key: &str) {
        assert_eq!(source.message_key(), key);
    }
}
