//! Locale resolution and translated string lookup for polyglot.
//!
//! Fluent resources under `locales/` are embedded at compile time so the
//! resolver never touches the filesystem to load catalogs. The default
//! catalog (`en`) doubles as the loader's fallback bundle, which gives every
//! lookup a two-tier chain: the active language first, then the default.
//!
//! [`LocaleResolver`] is the entry point. It picks the active language from
//! the persisted preference, the host environment, and finally the default
//! (see [`resolve_language`]), then keeps the preference store in step with
//! runtime changes and notifies subscribed listeners.

use fluent_templates::static_loader;

/// Re-export the Fluent value type for constructing lookup arguments.
pub use fluent_templates::fluent_bundle::FluentValue;
pub(crate) use fluent_templates::loader::LanguageIdentifier;

static_loader! {
    pub(crate) static LOADER = {
        locales: "../locales",
        fallback_language: "en",
        // Interpolated values are returned verbatim; escaping belongs to the
        // rendering layer.
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Code of the default language consulted when a key is missing.
pub const DEFAULT_LOCALE: &str = "en";

mod catalog;
mod environment;
mod events;
mod language;
mod loader;
mod locales;
mod lookup;
mod persistence;
mod resolver;
mod selection;
pub mod testing;

pub use environment::{
    EnvironmentLocale, LOCALE_ENV, StaticEnvironment, SystemEnvironment, normalise_locale_tag,
    primary_subtag,
};
pub use events::{LANGUAGE_CHANGED_EVENT, LanguageChanged, Listener, ListenerId, Listeners};
pub use language::Language;
pub use loader::{Arguments, I18nError, Localizer};
pub use locales::{available_locales, supports_locale, verify_catalogs};
pub use lookup::{MessageLookup, attribute_or_key, message_or_key};
pub use persistence::{
    FilePreferences, LANGUAGE_KEY, MemoryPreferences, PreferenceError, PreferenceStore,
    UnavailablePreferences,
};
pub use resolver::LocaleResolver;
pub use selection::{LocaleSelection, LocaleSource, resolve_language};
