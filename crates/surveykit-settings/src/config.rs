//! Configuration and settings management for SurveyKit
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats; the default location is the
//! platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Limits (resource guards for waypoint generation)
//! - Defaults substituted for missing or non-positive flight parameters
//! - Fallback behavior of the compatibility adapter
//! - Output preferences (measurement system, JSON formatting)

pub use surveykit_core::units::MeasurementSystem;

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "planner.toml";

/// Resource guards for waypoint generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    /// Upper bound on waypoints produced by a single request
    pub max_waypoints: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_waypoints: 50_000,
        }
    }
}

/// Values substituted when a request leaves a parameter unusable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Flight speed in m/s
    pub speed: f64,
    /// Flight altitude in meters
    pub altitude: f64,
    /// Scan line spacing in meters
    pub line_spacing: f64,
    /// Circle radius in meters when a legacy circle request carries none
    pub circle_radius: f64,
    /// Action tag given to photo waypoints
    pub photo_action: String,
    /// Waypoint spacing in meters along paths when no photo distance is known
    pub fallback_photo_spacing: f64,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            speed: 5.0,
            altitude: 50.0,
            line_spacing: 20.0,
            circle_radius: 100.0,
            photo_action: "takePhoto".to_string(),
            fallback_photo_spacing: 20.0,
        }
    }
}

/// Compatibility adapter behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    /// Retry with the legacy generator on empty or failed results
    pub enabled: bool,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Measurement system used for summaries
    pub measurement_system: MeasurementSystem,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Metric,
            pretty: true,
        }
    }
}

/// Complete planner configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    pub limits: LimitSettings,
    pub defaults: DefaultSettings,
    pub fallback: FallbackSettings,
    pub output: OutputSettings,
}

impl PlannerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/surveykit/planner.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("surveykit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else from the default path when it exists,
    /// else fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!(error = %e, "Using built-in planner defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = self.to_string_for(ConfigFormat::from_path(path)?)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Serialize in the given format
    pub fn to_string_for(&self, format: ConfigFormat) -> SettingsResult<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_waypoints == 0 {
            return Err(out_of_range("limits.max_waypoints", self.limits.max_waypoints));
        }

        let positive = [
            ("defaults.speed", self.defaults.speed),
            ("defaults.altitude", self.defaults.altitude),
            ("defaults.line_spacing", self.defaults.line_spacing),
            ("defaults.circle_radius", self.defaults.circle_radius),
            (
                "defaults.fallback_photo_spacing",
                self.defaults.fallback_photo_spacing,
            ),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
