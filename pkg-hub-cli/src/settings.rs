use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pkg_hub_core::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    /// Catalog file used when `--catalog` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Path prefix for generated page links.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_base_path() -> String {
    "/search".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: default_page_size(),
            base_path: default_base_path(),
        }
    }
}

/// Returns `~/.config/pkg-hub/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pkg-hub").join("settings.toml")
}

/// Load settings from the default location.
pub(crate) fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub(crate) fn load_settings_from(path: &Path) -> Settings {
    let mut settings = match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    };
    if settings.page_size == 0 {
        log::warn!(
            "page_size in {} must be at least 1, using {}",
            path.display(),
            DEFAULT_PAGE_SIZE
        );
        settings.page_size = DEFAULT_PAGE_SIZE;
    }
    settings
}

/// Save settings to `path` atomically (write to temp, then rename).
pub(crate) fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.base_path, "/search");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "catalog_path = \"/data/catalog.json\"\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(
            settings.catalog_path.as_deref(),
            Some(Path::new("/data/catalog.json"))
        );
        assert_eq!(settings.page_size, 25);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "page_size = \"lots\"").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn zero_page_size_is_normalized() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "page_size = 0").unwrap();
        assert_eq!(load_settings_from(&path).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let settings = Settings {
            catalog_path: Some(PathBuf::from("catalog.yaml")),
            page_size: 10,
            base_path: "/packages".to_string(),
        };

        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }
}
