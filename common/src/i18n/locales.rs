//! Catalog enumeration and validation.
//!
//! This module exposes the set of locales embedded in the Fluent bundles and
//! checks that every [`Language`] has a catalog before resolution runs.

use once_cell::sync::Lazy;

use fluent_templates::Loader;

use super::{I18nError, LOADER, Language};

static ALL_LOCALES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut locales: Vec<String> = LOADER.locales().map(|id| id.to_string()).collect();
    locales.sort_unstable();
    locales
});

/// Return a sorted slice of the locales with embedded bundles.
#[must_use]
pub fn available_locales() -> &'static [String] {
    ALL_LOCALES.as_slice()
}

/// Check whether `code` names a supported language.
///
/// The comparison is exact; tags such as `de-DE` are not supported codes.
#[must_use]
pub fn supports_locale(code: &str) -> bool {
    code.parse::<Language>().is_ok()
}

/// Confirm that every supported language has an embedded catalog.
pub fn verify_catalogs() -> Result<(), I18nError> {
    Language::ALL
        .into_iter()
        .find(|language| {
            ALL_LOCALES
                .binary_search_by(|candidate| candidate.as_str().cmp(language.code()))
                .is_err()
        })
        .map_or(Ok(()), |language| {
            Err(I18nError::MissingCatalog { language })
        })
}
