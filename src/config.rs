//! Configuration file support.
//!
//! Settings for the wheel's appearance, the initial picker state and the
//! log level are read from (and written to) a JSON file.

use std::path::Path;

use colorwheel_ui::constants::{
    DEFAULT_BLUR_RADIUS, DEFAULT_GRADIENT_RATIO, DEFAULT_INDICATOR_SIZE,
};
use colorwheel_ui::{GradientOptions, Rgb};
use serde::{Deserialize, Serialize};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Largest wheel side accepted from a config file or the command line.
pub const MAX_WHEEL_SIZE: u32 = 8192;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Wheel appearance
    #[serde(default)]
    pub wheel: WheelSettings,

    /// Picker state at startup
    #[serde(default)]
    pub initial: InitialState,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Wheel appearance section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelSettings {
    /// Side of the square wheel in pixels
    #[serde(default = "default_wheel_size")]
    pub size: u32,

    /// Diameter of the selection indicator
    #[serde(default = "default_indicator_size")]
    pub indicator_size: f32,

    /// Gaussian blur applied to the gradient disk
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f32,

    /// Gradient disk radius as a fraction of the wheel side
    #[serde(default = "default_gradient_ratio")]
    pub gradient_ratio: f32,
}

fn default_wheel_size() -> u32 {
    350
}

fn default_indicator_size() -> f32 {
    DEFAULT_INDICATOR_SIZE
}

fn default_blur_radius() -> f32 {
    DEFAULT_BLUR_RADIUS
}

fn default_gradient_ratio() -> f32 {
    DEFAULT_GRADIENT_RATIO
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            size: default_wheel_size(),
            indicator_size: default_indicator_size(),
            blur_radius: default_blur_radius(),
            gradient_ratio: default_gradient_ratio(),
        }
    }
}

impl WheelSettings {
    pub fn gradient_options(&self) -> GradientOptions {
        GradientOptions {
            gradient_ratio: self.gradient_ratio,
            blur_radius: self.blur_radius,
        }
    }
}

/// Startup picker state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    /// Starting color as 8-bit RGB
    #[serde(default = "default_initial_color")]
    pub color: [u8; 3],

    /// Starting brightness in [0, 1]
    #[serde(default = "default_initial_brightness")]
    pub brightness: f32,
}

fn default_initial_color() -> [u8; 3] {
    Rgb::RED.to_u8()
}

fn default_initial_brightness() -> f32 {
    1.0
}

impl Default for InitialState {
    fn default() -> Self {
        Self {
            color: default_initial_color(),
            brightness: default_initial_brightness(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            wheel: WheelSettings::default(),
            initial: InitialState::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the widgets cannot clamp on their own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wheel = &self.wheel;
        if wheel.size == 0 || wheel.size > MAX_WHEEL_SIZE {
            return Err(ConfigError::invalid(format!(
                "wheel.size must be in 1..={}, got {}",
                MAX_WHEEL_SIZE, wheel.size
            )));
        }
        if wheel.gradient_ratio <= 0.0 || !(0.0..=0.5).contains(&wheel.gradient_ratio) {
            return Err(ConfigError::invalid(format!(
                "wheel.gradient_ratio must be in (0, 0.5], got {}",
                wheel.gradient_ratio
            )));
        }
        let non_negative = |x: f32| x >= 0.0;
        if !non_negative(wheel.indicator_size) || !non_negative(wheel.blur_radius) {
            return Err(ConfigError::invalid(
                "wheel.indicator_size and wheel.blur_radius must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.initial.brightness) {
            return Err(ConfigError::invalid(format!(
                "initial.brightness must be in [0, 1], got {}",
                self.initial.brightness
            )));
        }
        Ok(())
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "colorwheel-config.json"
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A value is outside its allowed range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the offending value
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error with a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = AppConfig::default();
        let json = config.to_json().unwrap();
        let parsed = AppConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(config.wheel, WheelSettings::default());
        assert_eq!(config.initial.color, [255, 0, 0]);
        assert_eq!(config.initial.brightness, 1.0);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_wheel_section() {
        let config =
            AppConfig::from_json(r#"{"version": 1, "wheel": {"size": 200}, "log_level": "debug"}"#)
                .unwrap();
        assert_eq!(config.wheel.size, 200);
        assert_eq!(config.wheel.blur_radius, DEFAULT_BLUR_RADIUS);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_version_too_new() {
        let err = AppConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let err =
            AppConfig::from_json(r#"{"version": 1, "wheel": {"gradient_ratio": 0.9}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = AppConfig::from_json(r#"{"version": 1, "wheel": {"size": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("wheel.size"));
    }

    #[test]
    fn test_rejects_oversized_wheel() {
        let json = format!(
            r#"{{"version": 1, "wheel": {{"size": {}}}}}"#,
            MAX_WHEEL_SIZE + 1
        );
        let err = AppConfig::from_json(&json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let mut config = AppConfig::default();
        config.wheel.size = 100_000;
        assert!(config.validate().is_err());
        config.wheel.size = MAX_WHEEL_SIZE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gradient_options_follow_settings() {
        let mut settings = WheelSettings::default();
        settings.gradient_ratio = 0.3;
        settings.blur_radius = 4.0;
        let options = settings.gradient_options();
        assert_eq!(options.gradient_ratio, 0.3);
        assert_eq!(options.blur_radius, 4.0);
    }

    #[test]
    fn test_rejects_brightness_out_of_range() {
        let err =
            AppConfig::from_json(r#"{"version": 1, "initial": {"brightness": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("colorwheel-config-{}", std::process::id()));
        let path = dir.join(AppConfig::default_filename());
        let mut config = AppConfig::default();
        config.initial.brightness = 0.25;
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
