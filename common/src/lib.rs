//! Shared localisation infrastructure for polyglot: embedded Fluent
//! catalogs, language resolution, preference persistence, and change
//! notifications.

pub mod i18n;

pub use i18n::{
    Arguments, DEFAULT_LOCALE, EnvironmentLocale, FilePreferences, I18nError,
    LANGUAGE_CHANGED_EVENT, LANGUAGE_KEY, Language, LanguageChanged, LocaleResolver,
    LocaleSelection, LocaleSource, Localizer, MemoryPreferences, PreferenceError,
    PreferenceStore, StaticEnvironment, SystemEnvironment, available_locales, resolve_language,
    supports_locale,
};
