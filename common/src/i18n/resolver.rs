use std::fmt;

use log::{debug, warn};

use super::{
    Arguments, EnvironmentLocale, I18nError, LANGUAGE_KEY, Language, LanguageChanged, Listener,
    ListenerId, Listeners, LocaleSource, Localizer, PreferenceStore, attribute_or_key,
    message_or_key, resolve_language, verify_catalogs,
};

const TARGET: &str = "i18n::resolver";

/// Owns the active language and keeps the preference store in step with it.
///
/// The resolver is an explicit context object: create one at start-up with
/// [`LocaleResolver::initialise`] and hand it, or references to it, to the
/// code that renders strings. Only [`LocaleResolver::set_language`] and
/// [`LocaleResolver::set`] change the active language.
///
/// # Examples
///
/// ```
/// use polyglot_common::i18n::{
///     LANGUAGE_KEY, Language, LocaleResolver, MemoryPreferences, PreferenceStore,
///     StaticEnvironment,
/// };
///
/// let mut resolver = LocaleResolver::initialise(
///     Box::new(MemoryPreferences::new()),
///     &StaticEnvironment::new("de-DE"),
/// )
/// .expect("catalogs are embedded");
/// assert_eq!(resolver.active(), Language::De);
///
/// resolver.set_language("pl").expect("pl is supported");
/// assert_eq!(resolver.translate("language-name"), "Polski");
/// assert_eq!(
///     resolver.store().get(LANGUAGE_KEY).expect("readable").as_deref(),
///     Some("pl")
/// );
/// ```
pub struct LocaleResolver {
    store: Box<dyn PreferenceStore + Send>,
    localizer: Localizer,
    source: LocaleSource,
    listeners: Listeners,
}

impl LocaleResolver {
    /// Resolve the start-up language and take ownership of `store`.
    ///
    /// Fails only when a supported language has no embedded catalog.
    pub fn initialise(
        store: Box<dyn PreferenceStore + Send>,
        environment: &dyn EnvironmentLocale,
    ) -> Result<Self, I18nError> {
        verify_catalogs()?;

        let selection = resolve_language(store.as_ref(), environment);
        selection.log_outcome(TARGET);

        Ok(Self {
            store,
            source: selection.source(),
            localizer: selection.into_localizer(),
            listeners: Listeners::default(),
        })
    }

    /// The active language.
    #[must_use]
    pub const fn active(&self) -> Language {
        self.localizer.language()
    }

    /// Where the active language came from.
    #[must_use]
    pub const fn source(&self) -> LocaleSource {
        self.source
    }

    /// Localizer bound to the active language.
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Every language the resolver can switch to.
    #[must_use]
    pub const fn available_languages(&self) -> &'static [Language] {
        &Language::ALL
    }

    /// The preference store backing this resolver.
    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Release the preference store, e.g. to resolve again after a restart.
    #[must_use]
    pub fn into_store(self) -> Box<dyn PreferenceStore + Send> {
        self.store
    }

    /// Switch to the language named by `code`.
    ///
    /// Codes outside the supported set fail with
    /// [`I18nError::InvalidLanguage`] and leave the active language, the
    /// stored preference, and listeners untouched.
    pub fn set_language(&mut self, code: &str) -> Result<(), I18nError> {
        let language = code.parse::<Language>()?;
        self.set(language);
        Ok(())
    }

    /// Switch to `language`.
    ///
    /// The preference is written first; a failed write is logged and the
    /// in-memory switch still happens. Selecting the active language again
    /// still writes the preference and still notifies listeners.
    pub fn set(&mut self, language: Language) {
        if let Err(error) = self.store.set(LANGUAGE_KEY, language.code()) {
            warn!(
                target: TARGET,
                "could not persist language `{language}`: {error}; keeping it for this session only",
            );
        }

        let previous = self.localizer.language();
        self.localizer = Localizer::new(language);
        self.source = LocaleSource::RuntimeChange;

        let event = LanguageChanged::new(language, previous);
        let delivered = self.listeners.emit(&event);
        debug!(
            target: TARGET,
            "switched from `{previous}` to `{language}`; notified {delivered} listener(s)",
        );
    }

    /// Register a listener for [`LanguageChanged`] events.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns whether `id` was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Translate `key`, falling back to the default catalog and finally to
    /// the key itself.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        message_or_key(&self.localizer, key, None)
    }

    /// Translate `key` with interpolated `args`.
    #[must_use]
    pub fn translate_with_args(&self, key: &str, args: &Arguments<'_>) -> String {
        message_or_key(&self.localizer, key, Some(args))
    }

    /// Translate the nested message `key.attribute`.
    #[must_use]
    pub fn attribute(&self, key: &str, attribute: &str, args: Option<&Arguments<'_>>) -> String {
        attribute_or_key(&self.localizer, key, attribute, args)
    }

    /// Translate `key`, reporting a miss instead of rendering the key.
    pub fn try_translate(&self, key: &str) -> Result<String, I18nError> {
        self.localizer.message(key)
    }

    /// Translate `key` with `args`, reporting a miss instead of rendering
    /// the key.
    pub fn try_translate_with_args(
        &self,
        key: &str,
        args: &Arguments<'_>,
    ) -> Result<String, I18nError> {
        self.localizer.message_with_args(key, args)
    }
}

impl fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("active", &self.active())
            .field("source", &self.source)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
