//! Settings parser for config.toml

use super::types::Settings;
use paranoid_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "paranoid-scan";

const DEFAULT_CONFIG: &str = r#"# Paranoid Scan Configuration

[analysis]
step_interval_ms = 500     # Delay between progress labels
total_duration_ms = 3000   # Delay before the report is produced

[ui]
icons = "unicode"          # "unicode" or "nerd_fonts"
notice_duration_ms = 3000  # How long notices stay on screen

[behavior]
start_page = "landing"     # "landing" or "analyze"
"#;

/// Default location of the config file (`~/.config/paranoid-scan/config.toml`)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// A missing or unreadable file falls back to defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file at `config_path`
///
/// Existing files are left untouched. Returns true when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}
