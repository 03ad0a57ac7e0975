// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Default auto-dismiss delay and toast animation delays
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Keep toasts until they are dismissed by hand
//! config.notifications.default_duration_ms = Some(0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result, ValidationError};
use crate::ui::notifications::{QueueSettings, Timings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Notification queue and toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay for notifications that do not set one. `0` disables it.
    #[serde(
        default = "default_notification_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<i64>,

    /// Entrance phase length in milliseconds.
    #[serde(
        default = "default_enter_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub enter_delay_ms: Option<u64>,

    /// Exit phase length in milliseconds.
    #[serde(
        default = "default_exit_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_delay_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_notification_duration_ms(),
            enter_delay_ms: default_enter_delay_ms(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Builds queue defaults, rejecting a negative duration.
    pub fn queue_settings(&self) -> Result<QueueSettings> {
        let default_duration = match self.default_duration_ms {
            Some(ms) if ms < 0 => {
                return Err(Error::Validation(ValidationError::NegativeDuration(ms)));
            }
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms.unsigned_abs())),
            None => Some(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS)),
        };
        Ok(QueueSettings { default_duration })
    }

    /// Animation delays, clamped to `MAX_TOAST_ANIMATION_DELAY_MS`.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let clamp = |ms: u64| Duration::from_millis(ms.min(MAX_TOAST_ANIMATION_DELAY_MS));
        Timings {
            enter_delay: clamp(self.enter_delay_ms.unwrap_or(DEFAULT_TOAST_ENTER_DELAY_MS)),
            exit_delay: clamp(self.exit_delay_ms.unwrap_or(DEFAULT_TOAST_EXIT_DELAY_MS)),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notification_duration_ms() -> Option<i64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS as i64)
}

fn default_enter_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_ENTER_DELAY_MS)
}

fn default_exit_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_EXIT_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(mut config) => match config.notifications.queue_settings() {
            Ok(_) => (config, None),
            Err(err) => {
                config.notifications = NotificationsConfig::default();
                (
                    config,
                    Some(format!("Ignoring [notifications] in {}: {err}", path.display())),
                )
            }
        },
        Err(err) => (
            Config::default(),
            Some(format!("Could not load {}: {err}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_duration_ms: Some(0),
                enter_delay_ms: Some(20),
                exit_delay_ms: Some(300),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn negative_default_duration_is_replaced_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"dark\"\n\n[notifications]\ndefault_duration_ms = -10\n",
        )
        .expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.notifications, NotificationsConfig::default());
        assert!(warning.unwrap().contains("-10"));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[notifications]\nexit_delay_ms = 90\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.notifications.default_duration_ms,
            Some(DEFAULT_NOTIFICATION_DURATION_MS as i64)
        );
        assert_eq!(config.notifications.exit_delay_ms, Some(90));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let parsed = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn queue_settings_map_zero_to_persistent() {
        let notifications = NotificationsConfig {
            default_duration_ms: Some(0),
            ..NotificationsConfig::default()
        };
        assert_eq!(
            notifications.queue_settings().unwrap(),
            QueueSettings {
                default_duration: None
            }
        );
    }

    #[test]
    fn default_queue_settings_match_queue_defaults() {
        assert_eq!(
            NotificationsConfig::default().queue_settings().unwrap(),
            QueueSettings::default()
        );
    }

    #[test]
    fn timings_are_clamped() {
        let notifications = NotificationsConfig {
            enter_delay_ms: Some(u64::MAX),
            exit_delay_ms: None,
            ..NotificationsConfig::default()
        };
        let timings = notifications.timings();
        assert_eq!(
            timings.enter_delay,
            Duration::from_millis(MAX_TOAST_ANIMATION_DELAY_MS)
        );
        assert_eq!(
            timings.exit_delay,
            Duration::from_millis(DEFAULT_TOAST_EXIT_DELAY_MS)
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
