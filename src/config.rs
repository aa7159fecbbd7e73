//! Configuration management for the application.
//!
//! Loads, validates, and saves configuration in TOML format with
//! platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the key-hint status line on startup
    #[serde(default = "default_show_hints")]
    pub show_hints_on_startup: bool,
}

const fn default_show_hints() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_hints_on_startup: default_show_hints(),
        }
    }
}

/// Motion settings for the services carousel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Carousel advance speed in terminal cells per second
    #[serde(default = "default_carousel_speed")]
    pub carousel_speed: f32,
}

/// Default carousel speed (cells per second).
fn default_carousel_speed() -> f32 {
    5.0
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            carousel_speed: default_carousel_speed(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ObscuraStudio/config.toml`
/// - macOS: `~/Library/Application Support/ObscuraStudio/config.toml`
/// - Windows: `%APPDATA%\ObscuraStudio\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Carousel motion settings
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ObscuraStudio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using an atomic write.
    ///
    /// Uses the temp file + rename pattern so the file is never left in a
    /// corrupted state.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp config file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The carousel speed must be a positive finite number; everything else
    /// is unconstrained.
    pub fn validate(&self) -> Result<()> {
        let speed = self.motion.carousel_speed;
        if !speed.is_finite() || speed <= 0.0 {
            anyhow::bail!("motion.carousel_speed must be a positive number, got {speed}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.motion.carousel_speed > 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_speed() {
        let mut config = Config::default();

        config.motion.carousel_speed = 0.0;
        assert!(config.validate().is_err());

        config.motion.carousel_speed = -3.0;
        assert!(config.validate().is_err());

        config.motion.carousel_speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.show_hints_on_startup = false;
        config.motion.carousel_speed = 8.5;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        // No temp file left behind
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.motion.carousel_speed = 0.0;
        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme_mode = \"Dark\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Dark);
        assert!(config.ui.show_hints_on_startup);
        assert_eq!(
            config.motion.carousel_speed,
            Config::default().motion.carousel_speed
        );
    }
}
