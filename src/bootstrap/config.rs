//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the `AppConfig` DTO
//! - Report I/O and parsing errors with context
//!
//! Defaults are applied afterwards by `IntakeSettings::from_app_config`,
//! never here.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

use ow_app::IntakeSettings;
use ow_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// **NO validation is performed**:
/// - Empty strings are valid (they are facts)
/// - Missing sections result in empty values (facts)
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/openwith/config.toml`, e.g. `~/.config/openwith/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("openwith").join("config.toml"))
}

/// Resolve runtime settings.
///
/// An explicit path must load. Without one, the default location is used
/// when the file exists, otherwise every setting takes its default.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<IntakeSettings> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => load_config(&path)?,
            None => {
                debug!("No config file found, using defaults");
                AppConfig::empty()
            }
        },
    };
    Ok(IntakeSettings::from_app_config(&config))
}
