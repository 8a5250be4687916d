//! Shared catalog fixtures for unit tests.

use pkg_hub_catalog::{Catalog, CatalogEntry, Language, LanguageTarget};

const NAME_PREFIXES: &[&str] = &[
    "@aws-cdk/aws-iot",
    "@aws-cdk/aws-s3",
    "cdk-Watchful",
    "Projen-Construct",
];

/// Build a deterministic catalog of `n` entries.
///
/// Entry `i` is named `{prefix}-{i:03}` with the prefix cycling through
/// `NAME_PREFIXES`. Every entry targets TypeScript; Python when `i` is even,
/// .NET when divisible by 3, Java by 5, Go by 7.
pub(crate) fn sample_catalog(n: usize) -> Catalog {
    Catalog::new((0..n).map(sample_entry))
}

pub(crate) fn sample_entry(i: usize) -> CatalogEntry {
    let prefix = NAME_PREFIXES[i % NAME_PREFIXES.len()];
    let mut entry = CatalogEntry::new(format!("{}-{:03}", prefix, i), "1.0.0")
        .with_description(format!("Sample package number {}", i))
        .with_language(Language::TypeScript, LanguageTarget::default());

    let targets = [
        (2, Language::Python),
        (3, Language::DotNet),
        (5, Language::Java),
        (7, Language::Go),
    ];
    for (divisor, language) in targets {
        if i % divisor == 0 {
            entry = entry.with_language(language, LanguageTarget::default());
        }
    }
    entry
}

pub(crate) fn names<E: AsRef<CatalogEntry>>(entries: &[E]) -> Vec<String> {
    entries.iter().map(|e| e.as_ref().name.clone()).collect()
}
