//! SurveyKit Settings Crate
//!
//! Handles planner configuration: limits, parameter defaults, fallback
//! behavior and output preferences, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    ConfigFormat, DefaultSettings, FallbackSettings, LimitSettings, OutputSettings, PlannerConfig,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
