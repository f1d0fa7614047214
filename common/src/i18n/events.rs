//! Change notifications for the active language.

use std::collections::BTreeMap;
use std::fmt;

use super::Language;

/// Name under which language change events are published.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Payload delivered to listeners after every language change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LanguageChanged {
    language: Language,
    previous: Language,
}

impl LanguageChanged {
    /// Describe a change from `previous` to `language`.
    #[must_use]
    pub const fn new(language: Language, previous: Language) -> Self {
        Self { language, previous }
    }

    /// Event name, always [`LANGUAGE_CHANGED_EVENT`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        LANGUAGE_CHANGED_EVENT
    }

    /// The newly active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The language that was active before the change. Equal to
    /// [`Self::language`] when the active language was selected again.
    #[must_use]
    pub const fn previous(&self) -> Language {
        self.previous
    }
}

/// Callback invoked with each [`LanguageChanged`] event.
pub type Listener = Box<dyn Fn(&LanguageChanged) + Send + Sync>;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

/// Registry of change listeners.
///
/// Delivery order between listeners is unspecified; callers must not rely
/// on one listener observing the effects of another.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: BTreeMap<ListenerId, Listener>,
}

impl Listeners {
    /// Register `listener`, returning its handle.
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    /// Remove the listener registered under `id`. Returns whether one was
    /// registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Deliver `event` to every listener, returning how many were invoked.
    pub fn emit(&self, event: &LanguageChanged) -> usize {
        self.entries.values().for_each(|listener| listener(event));
        self.entries.len()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("registered", &self.entries.len())
            .finish()
    }
}
