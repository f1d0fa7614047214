//! Output formatting for the `show` and `list` commands.

use std::borrow::Cow;

use polyglot_common::i18n::{
    Arguments, FluentValue, Language, LocaleResolver, Localizer, message_or_key,
};
use serde::Serialize;

/// Native name of `language`, taken from its own catalog.
#[must_use]
pub fn native_name(language: Language) -> String {
    message_or_key(&Localizer::new(language), "language-name", None)
}

/// Two-line summary of the active language and how it was chosen, rendered
/// in the active language.
#[must_use]
pub fn format_active(resolver: &LocaleResolver) -> String {
    let active = resolver.active();
    let mut args: Arguments<'static> = Arguments::new();
    args.insert(Cow::Borrowed("language"), FluentValue::from(native_name(active)));
    args.insert(Cow::Borrowed("code"), FluentValue::from(active.code()));
    let headline = resolver.translate_with_args("active-language", &args);

    let mut source_args: Arguments<'static> = Arguments::new();
    source_args.insert(
        Cow::Borrowed("source"),
        FluentValue::from(resolver.translate(resolver.source().message_key())),
    );
    let provenance = resolver.attribute("active-language", "source", Some(&source_args));

    format!("{headline}\n{provenance}")
}

/// Supported languages, one per line, with the active one marked.
///
/// # Examples
///
/// ```
/// use polyglot_cli::output::format_human;
/// use polyglot_common::i18n::{LocaleResolver, MemoryPreferences, StaticEnvironment};
///
/// let resolver = LocaleResolver::initialise(
///     Box::new(MemoryPreferences::new()),
///     &StaticEnvironment::new("de-DE"),
/// )
/// .expect("catalogs are embedded");
/// let output = format_human(&resolver);
/// assert!(output.contains("* de  Deutsch"));
/// assert!(output.contains("  pl  Polski"));
/// ```
#[must_use]
pub fn format_human(resolver: &LocaleResolver) -> String {
    let mut output = resolver.translate("supported-languages");
    output.push('\n');

    for &language in resolver.available_languages() {
        let marker = if language == resolver.active() { '*' } else { ' ' };
        output.push_str(&format!(
            "{marker} {}  {}\n",
            language.code(),
            native_name(language)
        ));
    }

    output
}

/// Supported languages as pretty-printed JSON.
///
/// # Errors
///
/// Returns the encoder error if serialisation fails.
pub fn format_json(resolver: &LocaleResolver) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&LanguagesJson::from_resolver(resolver))
}

/// JSON-serialisable view of the supported languages.
#[derive(Debug, Serialize)]
pub struct LanguagesJson {
    /// Code of the active language.
    pub active: &'static str,
    /// Every supported language, default first.
    pub languages: Vec<LanguageEntry>,
}

impl LanguagesJson {
    fn from_resolver(resolver: &LocaleResolver) -> Self {
        let languages = resolver
            .available_languages()
            .iter()
            .map(|&language| LanguageEntry {
                code: language.code(),
                name: native_name(language),
                active: language == resolver.active(),
            })
            .collect();

        Self {
            active: resolver.active().code(),
            languages,
        }
    }
}

/// JSON entry for a single language.
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    /// Language code.
    pub code: &'static str,
    /// Native language name.
    pub name: String,
    /// Whether this is the active language.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_common::i18n::{LANGUAGE_KEY, MemoryPreferences, StaticEnvironment};
    use rstest::rstest;

    fn resolver_with(stored: Option<&str>) -> LocaleResolver {
        let store = stored.map_or_else(MemoryPreferences::new, |code| {
            MemoryPreferences::with_value(LANGUAGE_KEY, code)
        });
        LocaleResolver::initialise(Box::new(store), &StaticEnvironment::silent())
            .expect("embedded catalogs are complete")
    }

    #[rstest]
    #[case(Language::En, "English")]
    #[case(Language::De, "Deutsch")]
    #[case(Language::Pl, "Polski")]
    fn native_names_come_from_each_catalog(#[case] language: Language, #[case] name: &str) {
        assert_eq!(native_name(language), name);
    }

    #[rstest]
    fn active_summary_is_localised() {
        let output = format_active(&resolver_with(Some("de")));

        assert_eq!(
            output,
            "Aktive Sprache: Deutsch (de)\nErmittelt aus der gespeicherten Einstellung."
        );
    }

    #[rstest]
    fn fallback_summary_names_the_default() {
        let output = format_active(&resolver_with(None));

        assert_eq!(
            output,
            "Active language: English (en)\nResolved from the built-in default."
        );
    }

    #[rstest]
    fn human_listing_marks_the_active_language() {
        let output = format_human(&resolver_with(Some("pl")));

        assert_eq!(
            output,
            "Obsługiwane języki:\n  en  English\n  de  Deutsch\n* pl  Polski\n"
        );
    }

    #[rstest]
    fn json_listing_reports_every_language() {
        let json = format_json(&resolver_with(Some("de"))).expect("encodes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["active"], "de");
        let languages = value["languages"].as_array().expect("array");
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[1]["code"], "de");
        assert_eq!(languages[1]["name"], "Deutsch");
        assert_eq!(languages[1]["active"], true);
        assert_eq!(languages[2]["active"], false);
    }
}
