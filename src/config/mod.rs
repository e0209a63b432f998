// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[homepage]` - Hero slider timing and header scroll threshold
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_STOREFRONT_CONFIG_DIR` environment variable
//! 4. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_storefront::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Homepage behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomepageConfig {
    /// Delay between automatic slide advances, in milliseconds.
    /// Clamped to the supported range when applied.
    #[serde(
        default = "default_slide_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_interval_ms: Option<u64>,

    /// Whether the hero slider advances automatically.
    #[serde(
        default = "default_auto_advance",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance: Option<bool>,

    /// Scroll offset in pixels past which the header elevates.
    #[serde(
        default = "default_scroll_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f32>,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: Some(DEFAULT_SLIDE_INTERVAL_MS),
            auto_advance: Some(DEFAULT_AUTO_ADVANCE),
            scroll_threshold_px: Some(DEFAULT_SCROLL_THRESHOLD_PX),
        }
    }
}

/// Root configuration with all sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub homepage: HomepageConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_slide_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDE_INTERVAL_MS)
}

fn default_auto_advance() -> Option<bool> {
    Some(DEFAULT_AUTO_ADVANCE)
}

fn default_scroll_threshold_px() -> Option<f32> {
    Some(DEFAULT_SCROLL_THRESHOLD_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            homepage: HomepageConfig {
                slide_interval_ms: Some(8000),
                auto_advance: Some(false),
                scroll_threshold_px: Some(150.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[homepage]\nslide_interval_ms = \"soon\"")
            .expect("failed to write invalid config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_accepts_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"")
            .expect("failed to write partial config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
        assert_eq!(
            loaded.homepage.slide_interval_ms,
            Some(DEFAULT_SLIDE_INTERVAL_MS)
        );
    }

    #[test]
    fn default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(
            config.homepage.slide_interval_ms,
            Some(DEFAULT_SLIDE_INTERVAL_MS)
        );
        assert_eq!(config.homepage.auto_advance, Some(DEFAULT_AUTO_ADVANCE));
        assert_eq!(
            config.homepage.scroll_threshold_px,
            Some(DEFAULT_SCROLL_THRESHOLD_PX)
        );
    }
}
