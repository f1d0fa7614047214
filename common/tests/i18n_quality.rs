//! Quality gates for the Fluent catalogs.
//!
//! The default catalog must declare every message another locale
//! translates, placeables must agree across locales, and each file must
//! parse cleanly without duplicate identifiers.

use fluent_templates::fluent_bundle::FluentResource;
use polyglot_common::i18n::{DEFAULT_LOCALE, Language};
use rstest::rstest;
use std::collections::BTreeSet;
use std::fs;

#[path = "support/ftl.rs"]
mod ftl;
use ftl::{
    catalog_files, extract_identifier, extract_placeables, locale_directories, parse_ftl,
    parse_source,
};

fn secondary_locales() -> Vec<String> {
    locale_directories()
        .into_iter()
        .filter(|locale| locale != DEFAULT_LOCALE)
        .collect()
}

#[test]
fn locale_directories_match_supported_languages() {
    let expected: Vec<String> = {
        let mut codes: Vec<String> = Language::ALL
            .iter()
            .map(|language| language.code().to_owned())
            .collect();
        codes.sort();
        codes
    };
    assert_eq!(locale_directories(), expected);
}

#[test]
fn secondary_catalogs_only_translate_known_messages() {
    for locale in secondary_locales() {
        for path in catalog_files(&locale) {
            let file_name = path.file_name().expect("catalog file name");
            let default_path = path
                .parent()
                .and_then(|dir| dir.parent())
                .expect("locales root")
                .join(DEFAULT_LOCALE)
                .join(file_name);
            let defaults = parse_ftl(&default_path);

            for (id, entry) in parse_ftl(&path) {
                let default_entry = defaults.get(&id).unwrap_or_else(|| {
                    panic!("`{id}` in {} is missing from {DEFAULT_LOCALE}", path.display())
                });
                assert_eq!(
                    extract_placeables(&entry.value),
                    extract_placeables(&default_entry.value),
                    "placeables diverged for `{id}` in {locale}",
                );

                for (attribute, value) in &entry.attributes {
                    let default_value = default_entry.attributes.get(attribute).unwrap_or_else(|| {
                        panic!("`{id}.{attribute}` in {locale} is missing from {DEFAULT_LOCALE}")
                    });
                    assert_eq!(
                        extract_placeables(value),
                        extract_placeables(default_value),
                        "placeables diverged for `{id}.{attribute}` in {locale}",
                    );
                }
            }
        }
    }
}

#[test]
fn every_catalog_parses_without_duplicates() {
    for locale in locale_directories() {
        for path in catalog_files(&locale) {
            let source = fs::read_to_string(&path).expect("catalog readable");

            let mut seen = BTreeSet::new();
            for id in source.lines().filter_map(extract_identifier) {
                assert!(seen.insert(id.clone()), "duplicate `{id}` in {}", path.display());
            }

            if let Err((_, errors)) = FluentResource::try_new(source) {
                panic!("{} failed to parse: {errors:?}", path.display());
            }
        }
    }
}

#[rstest]
#[case("language-name", &[])]
#[case("active-language", &["code", "language"])]
#[case("invalid-language", &["code", "supported"])]
fn source_labels_and_placeables_are_present_everywhere(
    #[case] id: &str,
    #[case] placeables: &[&str],
) {
    let expected: BTreeSet<String> = placeables.iter().map(|name| (*name).to_owned()).collect();
    for locale in locale_directories() {
        let entries = catalog_files(&locale)
            .iter()
            .flat_map(|path| parse_ftl(path))
            .collect::<std::collections::BTreeMap<_, _>>();
        let entry = entries
            .get(id)
            .unwrap_or_else(|| panic!("`{id}` missing from {locale}"));
        assert_eq!(extract_placeables(&entry.value), expected, "{locale}");
    }
}

#[test]
fn continuation_lines_join_their_message() {
    let entries = parse_source("notice =\n    first line\n    second line\n    .hint = { $x }\n");
    let entry = entries.get("notice").expect("notice parsed");

    assert_eq!(entry.value, "\nfirst line\nsecond line");
    assert_eq!(entry.attributes.get("hint").map(String::as_str), Some("{ $x }"));
}
