use log::warn;

use super::{Arguments, I18nError, Localizer};

/// Lookup seam consumed by rendering code that needs translated strings.
pub trait MessageLookup {
    /// Locale reported when a lookup misses.
    fn locale(&self) -> &str;

    /// Resolve the message for `key`, interpolating `args` when supplied.
    fn message(&self, key: &str, args: Option<&Arguments<'_>>) -> Result<String, I18nError>;

    /// Resolve the nested message `key.attribute`.
    fn attribute(
        &self,
        key: &str,
        attribute: &str,
        args: Option<&Arguments<'_>>,
    ) -> Result<String, I18nError>;
}

impl MessageLookup for Localizer {
    fn locale(&self) -> &str {
        Self::locale(self)
    }

    fn message(&self, key: &str, args: Option<&Arguments<'_>>) -> Result<String, I18nError> {
        match args {
            Some(arguments) => self.message_with_args(key, arguments),
            None => Self::message(self, key),
        }
    }

    fn attribute(
        &self,
        key: &str,
        attribute: &str,
        args: Option<&Arguments<'_>>,
    ) -> Result<String, I18nError> {
        match args {
            Some(arguments) => self.attribute_with_args(key, attribute, arguments),
            None => Self::attribute(self, key, attribute),
        }
    }
}

/// Resolve `key`, returning the key itself when no catalog defines it.
///
/// A miss is logged at `warn` under the `i18n::lookup` target so that gaps in
/// the catalogs show up in logs instead of disappearing silently. A message
/// that exists but cannot be fully formatted renders the text Fluent
/// produced, with unresolved placeables left as `{$name}`, and is logged
/// separately.
///
/// # Examples
///
/// ```
/// use polyglot_common::i18n::{Language, Localizer, message_or_key};
///
/// let localizer = Localizer::new(Language::Pl);
/// assert_eq!(message_or_key(&localizer, "language-name", None), "Polski");
/// assert_eq!(message_or_key(&localizer, "missing.key", None), "missing.key");
/// ```
#[must_use]
pub fn message_or_key(
    lookup: &impl MessageLookup,
    key: &str,
    args: Option<&Arguments<'_>>,
) -> String {
    lookup
        .message(key, args)
        .unwrap_or_else(|error| placeholder(lookup, key, error))
}

/// Resolve `key.attribute`, returning the composed key on a miss.
///
/// Formatting failures are handled as in [`message_or_key`].
#[must_use]
pub fn attribute_or_key(
    lookup: &impl MessageLookup,
    key: &str,
    attribute: &str,
    args: Option<&Arguments<'_>>,
) -> String {
    lookup
        .attribute(key, attribute, args)
        .unwrap_or_else(|error| placeholder(lookup, &format!("{key}.{attribute}"), error))
}

fn placeholder(lookup: &impl MessageLookup, key: &str, error: I18nError) -> String {
    if let I18nError::Format {
        key: message,
        locale,
        partial,
        reason,
    } = error
    {
        warn!(
            target: "i18n::lookup",
            "message `{message}` in `{locale}` is incomplete: {reason}; rendering the partial text",
        );
        return partial;
    }

    warn!(
        target: "i18n::lookup",
        "{error}; rendering the key `{key}` for locale `{}`",
        lookup.locale(),
    );
    key.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::i18n::testing::FailingLookup;
    use rstest::rstest;

    #[rstest]
    fn failing_lookup_renders_the_key() {
        let lookup = FailingLookup::new("greeting");
        assert_eq!(message_or_key(&lookup, "greeting", None), "greeting");
    }

    #[rstest]
    fn failing_attribute_lookup_renders_the_composed_key() {
        let lookup = FailingLookup::new("active-language.source");
        assert_eq!(
            attribute_or_key(&lookup, "active-language", "source", None),
            "active-language.source"
        );
    }

    #[rstest]
    fn messages_missing_an_argument_render_the_partial_text() {
        let localizer = Localizer::new(Language::De);

        assert_eq!(message_or_key(&localizer, "greeting", None), "Hallo, {$name}!");
    }

    #[rstest]
    fn partially_supplied_arguments_keep_the_rest_as_placeables() {
        let localizer = Localizer::new(Language::En);
        let mut args = Arguments::new();
        args.insert("language".into(), "English".into());

        assert_eq!(
            message_or_key(&localizer, "active-language", Some(&args)),
            "Active language: English ({$code})"
        );
    }

    #[rstest]
    fn attributes_missing_an_argument_render_the_partial_text() {
        let localizer = Localizer::new(Language::Pl);

        assert_eq!(
            attribute_or_key(&localizer, "active-language", "source", None),
            "Ustalono na podstawie: {$source}."
        );
    }

    #[rstest]
    fn localizer_resolves_attributes_through_the_trait() {
        let localizer = Localizer::new(Language::En);
        let mut args = Arguments::new();
        args.insert("source".into(), "the saved preference".into());

        let text = attribute_or_key(&localizer, "active-language", "source", Some(&args));

        assert_eq!(text, "Resolved from the saved preference.");
    }
}
