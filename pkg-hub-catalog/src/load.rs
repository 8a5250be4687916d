//! Catalog file loading.
//!
//! A catalog file is a single document with a `packages` list, stored as
//! JSON (`.json`) or YAML (`.yaml` / `.yml`).

use crate::types::{Catalog, CatalogEntry};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Unsupported catalog format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    packages: Vec<CatalogEntry>,
}

/// Load a catalog snapshot from disk, choosing the parser by extension.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let display = path.display().to_string();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let is_json = match ext.as_deref() {
        Some("json") => true,
        Some("yaml") | Some("yml") => false,
        _ => return Err(LoadError::UnsupportedFormat(display)),
    };

    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: display.clone(),
        source: e,
    })?;

    let file: CatalogFile = if is_json {
        serde_json::from_str(&contents).map_err(|e| LoadError::Json {
            path: display.clone(),
            source: e,
        })?
    } else {
        serde_yml::from_str(&contents).map_err(|e| LoadError::Yaml {
            path: display.clone(),
            source: e,
        })?
    };

    let catalog = into_catalog(file);
    log::debug!("Loaded {} packages from {}", catalog.len(), display);
    Ok(catalog)
}

/// Parse an in-memory JSON catalog document.
pub fn parse_catalog_json(contents: &str) -> Result<Catalog, LoadError> {
    let file: CatalogFile = serde_json::from_str(contents).map_err(|e| LoadError::Json {
        path: "<memory>".to_string(),
        source: e,
    })?;
    Ok(into_catalog(file))
}

/// Parse an in-memory YAML catalog document.
pub fn parse_catalog_yaml(contents: &str) -> Result<Catalog, LoadError> {
    let file: CatalogFile = serde_yml::from_str(contents).map_err(|e| LoadError::Yaml {
        path: "<memory>".to_string(),
        source: e,
    })?;
    Ok(into_catalog(file))
}

/// Build the snapshot, keeping the first entry for each name.
fn into_catalog(file: CatalogFile) -> Catalog {
    let mut seen = HashSet::new();
    let entries: Vec<CatalogEntry> = file
        .packages
        .into_iter()
        .filter(|entry| {
            if seen.insert(entry.name.clone()) {
                true
            } else {
                log::warn!("Dropping duplicate catalog entry '{}'", entry.name);
                false
            }
        })
        .collect();
    Catalog::new(entries)
}
