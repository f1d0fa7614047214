//! Test doubles shared by unit and behaviour tests.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};

use super::{
    Arguments, I18nError, LanguageChanged, Listener, MemoryPreferences, MessageLookup,
    PreferenceError, PreferenceStore,
};

/// Test double that always returns `MissingMessage` errors for lookups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailingLookup {
    message_key: Cow<'static, str>,
    locale: Cow<'static, str>,
}

impl FailingLookup {
    /// Construct a failing lookup for `message_key` using the default test locale.
    #[must_use]
    pub fn new(message_key: impl Into<Cow<'static, str>>) -> Self {
        Self::with_locale(message_key, Cow::Borrowed("test"))
    }

    /// Construct a failing lookup for `message_key` and `locale`.
    #[must_use]
    pub fn with_locale(
        message_key: impl Into<Cow<'static, str>>,
        locale: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message_key: message_key.into(),
            locale: locale.into(),
        }
    }

    fn error(&self) -> I18nError {
        I18nError::MissingMessage {
            key: self.message_key.clone().into_owned(),
            locale: self.locale.clone().into_owned(),
        }
    }
}

impl MessageLookup for FailingLookup {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn message(&self, _key: &str, _args: Option<&Arguments<'_>>) -> Result<String, I18nError> {
        Err(self.error())
    }

    fn attribute(
        &self,
        _key: &str,
        _attribute: &str,
        _args: Option<&Arguments<'_>>,
    ) -> Result<String, I18nError> {
        Err(self.error())
    }
}

/// Preference store whose reads, writes, or both fail with
/// [`PreferenceError::Unavailable`].
///
/// Values written while writes are allowed are kept in memory so tests can
/// combine a healthy write path with a broken read path.
#[derive(Clone, Debug, Default)]
pub struct FlakyPreferences {
    inner: MemoryPreferences,
    fail_reads: bool,
    fail_writes: bool,
}

impl FlakyPreferences {
    /// A store that rejects every read and write.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            inner: MemoryPreferences::new(),
            fail_reads: true,
            fail_writes: true,
        }
    }

    /// A store that reads from `inner` but rejects writes.
    #[must_use]
    pub const fn read_only(inner: MemoryPreferences) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: true,
        }
    }

    /// A store that accepts writes but fails every read.
    #[must_use]
    pub fn write_only() -> Self {
        Self {
            inner: MemoryPreferences::new(),
            fail_reads: true,
            fail_writes: false,
        }
    }

    /// Peek at the stored value without going through the failing read path.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.inner.get(key).ok().flatten()
    }

    fn unavailable_error() -> PreferenceError {
        PreferenceError::Unavailable {
            reason: String::from("storage disabled for this test"),
        }
    }
}

impl PreferenceStore for FlakyPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if self.fail_reads {
            return Err(Self::unavailable_error());
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.fail_writes {
            return Err(Self::unavailable_error());
        }
        self.inner.set(key, value)
    }
}

/// Listener double that records every delivered event.
///
/// Clones share the same record, so a test can hand one clone to the
/// resolver and assert on another.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<LanguageChanged>>>,
}

impl RecordingListener {
    /// Return a boxed listener that appends to this record.
    #[must_use]
    pub fn listener(&self) -> Listener {
        let events = Arc::clone(&self.events);
        Box::new(move |event| {
            events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(*event);
        })
    }

    /// Events recorded so far, in delivery order.
    #[must_use]
    pub fn events(&self) -> Vec<LanguageChanged> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
