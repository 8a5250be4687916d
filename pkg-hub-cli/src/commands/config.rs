use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{self, Settings};

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(settings: &Settings) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "pkg-hub Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    match &settings.catalog_path {
        Some(p) => log::info!("  catalog_path: {}", p.display()),
        None => log::info!(
            "  catalog_path: {}",
            "(unset)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    log::info!("  page_size:    {}", settings.page_size);
    log::info!("  base_path:    {}", settings.base_path);
}

/// Write a default settings file unless one already exists.
pub(crate) fn run_config_init() -> Result<(), CliError> {
    let path = settings::settings_path();
    if path.exists() {
        log::warn!("Settings file already exists at {}", path.display());
        return Ok(());
    }
    settings::save_settings_to(&Settings::default(), &path)
        .map_err(|e| CliError::config(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Wrote default settings to {}", path.display());
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}
