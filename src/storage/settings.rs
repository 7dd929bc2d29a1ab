//! Settings storage
//!
//! Manages persistence of user preferences and widget timing.

use crate::storage::{get_data_dir, StorageError};
use crate::types::config::WidgetConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI theme: "dark" or "light"
    pub theme: String,
    /// Seconds of inactivity before the greeting bubble pops up
    #[serde(default = "default_greeting_delay_secs")]
    pub greeting_delay_secs: u64,
    /// Shortest simulated thinking time, in milliseconds
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,
    /// Longest simulated thinking time (exclusive), in milliseconds
    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
}

fn default_greeting_delay_secs() -> u64 {
    15
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    2000
}

fn default_assistant_name() -> String {
    "Jarvis".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            greeting_delay_secs: default_greeting_delay_secs(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
            assistant_name: default_assistant_name(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }

        self.greeting_delay_secs = self.greeting_delay_secs.clamp(1, 600);
        self.reply_delay_max_ms = self.reply_delay_max_ms.min(30_000);
        self.reply_delay_min_ms = self.reply_delay_min_ms.min(self.reply_delay_max_ms);

        if self.assistant_name.trim().is_empty() {
            self.assistant_name = default_assistant_name();
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }

    /// Timing configuration for a freshly mounted widget
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            greeting_delay: Duration::from_secs(self.greeting_delay_secs),
            reply_delay_min: Duration::from_millis(self.reply_delay_min_ms),
            reply_delay_max: Duration::from_millis(self.reply_delay_max_ms),
            assistant_name: self.assistant_name.clone(),
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load and validate settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.greeting_delay_secs, 15);
        assert_eq!(settings.reply_delay_min_ms, 1000);
        assert_eq!(settings.reply_delay_max_ms, 2000);
        assert!(settings.is_dark());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        // Test invalid theme
        settings.theme = "neon".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        // Test delay ordering
        settings.reply_delay_min_ms = 5000;
        settings.reply_delay_max_ms = 3000;
        settings.validate();
        assert_eq!(settings.reply_delay_min_ms, 3000);

        // Test greeting delay clamping
        settings.greeting_delay_secs = 0;
        settings.validate();
        assert_eq!(settings.greeting_delay_secs, 1);

        settings.assistant_name = "  ".to_string();
        settings.validate();
        assert_eq!(settings.assistant_name, "Jarvis");
    }

    #[test]
    fn test_widget_config_from_defaults() {
        assert_eq!(AppSettings::default().widget_config(), WidgetConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let loaded: AppSettings = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.greeting_delay_secs, 15);
        assert_eq!(loaded.assistant_name, "Jarvis");
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.theme = "light".to_string();
        settings.reply_delay_min_ms = 10;
        save_settings_to(&path, &settings).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }
}
