//! Fluent Translation List (FTL) parsing for catalog quality tests.
//!
//! The parser understands message declarations, attribute lines, and
//! indented continuations, which is enough to compare catalogs without
//! going through the runtime loader.
#![expect(
    clippy::expect_used,
    reason = "catalog helpers only run under test and fail the test on unreadable fixtures"
)]

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct FtlEntry {
    pub value: String,
    pub attributes: BTreeMap<String, String>,
}

static MESSAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(.*)$").expect("message regex compiles")
});
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+\.([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(.*)$").expect("attribute regex compiles")
});
static PLACEABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([A-Za-z][A-Za-z0-9_-]*)").expect("placeable regex compiles"));

pub fn locales_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../locales")
}

/// Every `*.ftl` file below `locale`, sorted by file name.
pub fn catalog_files(locale: &str) -> Vec<PathBuf> {
    let directory = locales_root().join(locale);
    let mut files: Vec<PathBuf> = fs::read_dir(&directory)
        .unwrap_or_else(|error| panic!("{} should be readable: {error}", directory.display()))
        .map(|entry| entry.expect("valid directory entry").path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("ftl"))
        .collect();
    files.sort();
    files
}

/// Names of the locale directories shipped with the crate.
pub fn locale_directories() -> Vec<String> {
    let mut locales: Vec<String> = fs::read_dir(locales_root())
        .expect("locales directory should be readable")
        .filter_map(|entry| {
            let entry = entry.expect("valid directory entry");
            entry
                .file_type()
                .ok()
                .filter(|kind| kind.is_dir())
                .and_then(|_| entry.file_name().into_string().ok())
        })
        .collect();
    locales.sort();
    locales
}

pub fn parse_ftl(path: &Path) -> BTreeMap<String, FtlEntry> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|error| panic!("{} should be readable: {error}", path.display()));
    parse_source(&content)
}

pub fn parse_source(content: &str) -> BTreeMap<String, FtlEntry> {
    let mut entries: BTreeMap<String, FtlEntry> = BTreeMap::new();
    let mut current_id: Option<String> = None;
    let mut current_attribute: Option<String> = None;

    for line in content.lines() {
        if let Some(captures) = MESSAGE_RE.captures(line) {
            let id = captures[1].to_string();
            entries.entry(id.clone()).or_default().value = captures[2].to_string();
            current_id = Some(id);
            current_attribute = None;
            continue;
        }

        if let Some(captures) = ATTRIBUTE_RE.captures(line) {
            if let Some(id) = &current_id {
                let name = captures[1].to_string();
                entries
                    .entry(id.clone())
                    .or_default()
                    .attributes
                    .insert(name.clone(), captures[2].to_string());
                current_attribute = Some(name);
            }
            continue;
        }

        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some(entry) = current_id.as_ref().and_then(|id| entries.get_mut(id)) else {
            continue;
        };
        let target = match &current_attribute {
            Some(attribute) => entry.attributes.entry(attribute.clone()).or_default(),
            None => &mut entry.value,
        };
        target.push('\n');
        target.push_str(line.trim());
    }

    entries
}

/// Variable names referenced by a message or attribute body.
pub fn extract_placeables(text: &str) -> BTreeSet<String> {
    PLACEABLE_RE
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Identifier declared on `line`, ignoring comments and indented lines.
pub fn extract_identifier(line: &str) -> Option<String> {
    if matches!(line.as_bytes().first(), Some(b' ' | b'\t')) {
        return None;
    }
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.is_empty() {
        return None;
    }
    let (identifier, _) = trimmed.split_once('=')?;
    let id = identifier.trim();
    (!id.is_empty()).then(|| id.to_string())
}
