//! Data model types for the package catalog.
//!
//! A [`Catalog`] is an ordered, immutable snapshot of [`CatalogEntry`]
//! records. A new snapshot replaces the old one wholesale; entries are never
//! mutated in place, which is why they are handed out behind `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

// ── Language ────────────────────────────────────────────────────────────────

/// Target languages a package can be published for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    Python,
    Java,
    DotNet,
    Go,
}

/// All language variants in display order.
const ALL_LANGUAGES: &[Language] = &[
    Language::TypeScript,
    Language::Python,
    Language::Java,
    Language::DotNet,
    Language::Go,
];

impl Language {
    /// Identifier used as a key in [`CatalogEntry::languages`] and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Java => "java",
            Self::DotNet => "dotnet",
            Self::Go => "go",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::DotNet => ".NET",
            Self::Go => "Go",
        }
    }

    /// Alternative names accepted when parsing (case-insensitive).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::TypeScript => &["ts", "javascript", "js", "node"],
            Self::Python => &["py"],
            Self::Java => &["jvm"],
            Self::DotNet => &["csharp", "c#", ".net", "net"],
            Self::Go => &["golang"],
        }
    }

    pub fn all() -> &'static [Language] {
        ALL_LANGUAGES
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageParseError(pub String);

impl std::fmt::Display for LanguageParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown language: '{}'", self.0)
    }
}

impl std::error::Error for LanguageParseError {}

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    /// Matches against `as_str()` and every entry in `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &language in ALL_LANGUAGES {
            if language.as_str() == lower || language.aliases().contains(&lower.as_str()) {
                return Ok(language);
            }
        }
        Err(LanguageParseError(s.to_string()))
    }
}

// ── Entry ───────────────────────────────────────────────────────────────────

/// Per-language publishing metadata for a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Any other fields the catalog carries for this language.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One package's searchable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Globally unique key within a catalog.
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub version: String,
    /// Keyed by language identifier. Keys outside [`Language`] are kept but
    /// never match a language filter.
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageTarget>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: version.into(),
            languages: BTreeMap::new(),
            tags: BTreeSet::new(),
            keywords: Vec::new(),
            author: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_language(mut self, language: Language, target: LanguageTarget) -> Self {
        self.languages.insert(language.as_str().to_string(), target);
        self
    }

    /// Whether `language` is a key of the `languages` mapping.
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains_key(language.as_str())
    }

    /// Known languages this entry is published for, in display order.
    pub fn supported_languages(&self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|l| self.supports(*l))
            .collect()
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// An ordered, immutable snapshot of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub packages: Vec<Arc<CatalogEntry>>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            packages: entries.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.packages.iter()
    }

    /// Look up an entry by its unique name.
    pub fn find(&self, name: &str) -> Option<&Arc<CatalogEntry>> {
        self.packages.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for &language in Language::all() {
            let parsed: Language = language.as_str().parse().unwrap();
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        let cases = [
            ("TS", Language::TypeScript),
            ("Py", Language::Python),
            ("C#", Language::DotNet),
            ("csharp", Language::DotNet),
            ("golang", Language::Go),
            ("  java ", Language::Java),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Language>().unwrap(), expected, "alias '{}'", input);
        }
    }

    #[test]
    fn unknown_language_is_err() {
        assert!("cobol".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn supported_languages_ignore_unknown_keys() {
        let mut entry = CatalogEntry::new("pkg", "1.0.0")
            .with_language(Language::Go, LanguageTarget::default())
            .with_language(Language::Python, LanguageTarget::default());
        entry
            .languages
            .insert("rust".to_string(), LanguageTarget::default());

        assert_eq!(
            entry.supported_languages(),
            vec![Language::Python, Language::Go]
        );
        assert!(!entry.supports(Language::Java));
    }
}
