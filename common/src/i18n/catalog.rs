//! Direct access to the embedded catalogs.
//!
//! The static loader answers `None` both when a message is absent and when a
//! message exists but Fluent reports errors while formatting it, for example
//! when an argument is not supplied. This module keeps a second set of
//! bundles over the same sources so the two cases can be told apart, and so
//! the text Fluent still produces for an incomplete message can be rendered.

use std::collections::HashMap;

use fluent_templates::fluent_bundle::concurrent::FluentBundle;
use fluent_templates::fluent_bundle::{FluentArgs, FluentResource};
use log::warn;
use once_cell::sync::Lazy;

use super::{Arguments, Language};

const SOURCES: [(Language, &str); 3] = [
    (Language::En, include_str!("../../../locales/en/polyglot.ftl")),
    (Language::De, include_str!("../../../locales/de/polyglot.ftl")),
    (Language::Pl, include_str!("../../../locales/pl/polyglot.ftl")),
];

static BUNDLES: Lazy<HashMap<Language, FluentBundle<FluentResource>>> = Lazy::new(|| {
    SOURCES
        .into_iter()
        .map(|(language, source)| (language, build_bundle(language, source)))
        .collect()
});

fn build_bundle(language: Language, source: &str) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source.to_owned()).unwrap_or_else(|(resource, errors)| {
        warn!(
            target: "i18n::catalog",
            "catalog `{language}` has {} syntax error(s); keeping the entries that parsed",
            errors.len(),
        );
        resource
    });

    let mut bundle = FluentBundle::new_concurrent(vec![language.identifier()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!(
            target: "i18n::catalog",
            "catalog `{language}`: {} entries could not be added",
            errors.len(),
        );
    }
    bundle
}

/// Text Fluent produced for a message that failed to format cleanly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct PartialMessage {
    pub(super) language: Language,
    pub(super) text: String,
    pub(super) reason: String,
}

/// Format `key` in the first of `languages` whose catalog defines it.
///
/// `key` may name an attribute as `message.attribute`. Returns `None` when no
/// listed catalog defines the message, or when it defines it without a value.
pub(super) fn format_defined(
    languages: &[Language],
    key: &str,
    args: Option<&Arguments<'_>>,
) -> Option<PartialMessage> {
    let fluent_args = args.map(to_fluent_args);
    languages.iter().find_map(|&language| {
        let bundle = BUNDLES.get(&language)?;
        let pattern = match key.split_once('.') {
            Some((message, attribute)) => {
                bundle.get_message(message)?.get_attribute(attribute)?.value()
            }
            None => bundle.get_message(key)?.value()?,
        };

        let mut errors = Vec::new();
        let text = bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors)
            .into_owned();
        let reason = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Some(PartialMessage {
            language,
            text,
            reason,
        })
    })
}

fn to_fluent_args<'a>(arguments: &Arguments<'a>) -> FluentArgs<'a> {
    let mut fluent_args = FluentArgs::with_capacity(arguments.len());
    for (name, value) in arguments {
        fluent_args.set(name.to_string(), value.clone());
    }
    fluent_args
}
