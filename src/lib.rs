//! # SurveyKit
//!
//! Flight planning for drone survey missions. Turns user-drawn shapes and
//! flight parameters into ordered waypoint lists for aerial photography:
//! - Rectangles flown as boustrophedon rows or columns
//! - Circles flown as inward-facing orbits
//! - Polygons covered by a clipped raster
//! - Polylines followed point to point, or covered when closed
//!
//! ## Architecture
//!
//! SurveyKit is organized as a workspace with multiple crates:
//!
//! 1. **surveykit-core** - Coordinates, shapes, parameters, waypoints, units
//! 2. **surveykit-planner** - Geometry kernel, strategies, orchestration, fallback
//! 3. **surveykit-settings** - Limits, defaults and output preferences (JSON/TOML)
//! 4. **surveykit** - Command-line binary that ties the crates together

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub use surveykit_core::{
    BoundingBox, CameraParameters, Coordinate, Error, GenerationParameters, MeasurementSystem,
    Result, ShapeDescriptor, ShapeKind, Waypoint,
};

pub use surveykit_planner::{
    CompatibilityAdapter, FallbackGenerator, GenerationReport, LegacyGenerator, LegacyRequest,
    MissionSummary, PlanError, PlanRequest, ShapeFailure, ShapeInput, WaypointGenerator,
    WaypointOrchestrator,
};

pub use surveykit_settings::{ConfigFormat, PlannerConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support (defaults to `info`)
/// - Human-readable output, or one JSON object per line with `json`
///
/// Stdout stays reserved for plan output.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        registry
            .with(fmt_layer)
            .try_init()
            .context("failed to install log subscriber")?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        registry
            .with(fmt_layer)
            .try_init()
            .context("failed to install log subscriber")?;
    }

    Ok(())
}

/// Read and decode a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Encode `value` as JSON, pretty-printed on request.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to encode output")
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

/// Plan a batch request file with the given configuration.
pub fn plan_file(path: &Path, config: &PlannerConfig) -> anyhow::Result<GenerationReport> {
    let request: PlanRequest = read_json(path)?;
    Ok(WaypointOrchestrator::from_config(config).generate_request(&request))
}

/// Plan a single-shape request file through the fallback adapter.
pub fn plan_legacy_file(path: &Path, config: &PlannerConfig) -> anyhow::Result<Vec<Waypoint>> {
    let request: LegacyRequest = read_json(path)?;
    CompatibilityAdapter::from_config(config)
        .generate_legacy(&request)
        .with_context(|| format!("failed to plan {}", path.display()))
}
