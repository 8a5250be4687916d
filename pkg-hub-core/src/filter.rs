//! Text and language filtering over a catalog snapshot.
//!
//! Matching is a plain case-insensitive substring test on the package name
//! combined with a membership test on the entry's language keys. Nothing is
//! scored; output keeps catalog order.

use std::sync::Arc;

use pkg_hub_catalog::{CatalogEntry, Language};

/// Whether a single entry passes both predicates.
pub fn matches(entry: &CatalogEntry, text: &str, language: Option<Language>) -> bool {
    matches_lowered(entry, &text.to_lowercase(), language)
}

/// Return the entries matching `text` and `language`, in input order.
///
/// Empty `text` and absent `language` each let every entry through.
pub fn filter(
    entries: &[Arc<CatalogEntry>],
    text: &str,
    language: Option<Language>,
) -> Vec<Arc<CatalogEntry>> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches_lowered(entry, &needle, language))
        .cloned()
        .collect()
}

fn matches_lowered(entry: &CatalogEntry, needle: &str, language: Option<Language>) -> bool {
    let text_ok = needle.is_empty() || entry.name.to_lowercase().contains(needle);
    text_ok && language.is_none_or(|l| entry.supports(l))
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
