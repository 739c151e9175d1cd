//! Generator composition with fallback.
//!
//! [`FallbackGenerator`] wraps a primary and a secondary generator chosen at
//! construction time. [`CompatibilityAdapter`] is the production pairing:
//! the shape-aware orchestrator first, the legacy zig-zag second.

use crate::error::PlanResult;
use crate::legacy::LegacyGenerator;
use crate::orchestrator::WaypointOrchestrator;
use crate::request::LegacyRequest;
use surveykit_core::Waypoint;
use surveykit_settings::PlannerConfig;
use tracing::{info, warn};

/// Anything that can answer a single-shape request.
pub trait WaypointGenerator: Send + Sync {
    fn name(&self) -> &str;

    fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>>;
}

impl<T: WaypointGenerator + ?Sized> WaypointGenerator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        (**self).generate_legacy(request)
    }
}

impl WaypointGenerator for WaypointOrchestrator {
    fn name(&self) -> &str {
        "orchestrator"
    }

    fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        WaypointOrchestrator::generate_legacy(self, request)
    }
}

impl WaypointGenerator for LegacyGenerator {
    fn name(&self) -> &str {
        "legacy"
    }

    fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        self.generate(request)
    }
}

/// Calls `primary`; on an empty result or a recoverable error, calls
/// `fallback` with the same request.
///
/// Input rejections from the primary are returned as-is. Errors from the
/// fallback propagate.
#[derive(Debug, Clone)]
pub struct FallbackGenerator<P, F> {
    primary: P,
    fallback: F,
    enabled: bool,
}

impl<P, F> FallbackGenerator<P, F>
where
    P: WaypointGenerator,
    F: WaypointGenerator,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            enabled: true,
        }
    }

    /// With `false`, the primary's result is returned unchanged.
    pub fn with_fallback_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    fn run_fallback(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        let waypoints = self.fallback.generate_legacy(request)?;
        info!(
            generator = self.fallback.name(),
            count = waypoints.len(),
            "Fallback generator produced waypoints"
        );
        Ok(waypoints)
    }
}

impl<P, F> WaypointGenerator for FallbackGenerator<P, F>
where
    P: WaypointGenerator,
    F: WaypointGenerator,
{
    fn name(&self) -> &str {
        "fallback"
    }

    fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        match self.primary.generate_legacy(request) {
            Ok(waypoints) if !waypoints.is_empty() || !self.enabled => Ok(waypoints),
            Ok(_) => {
                warn!(
                    primary = self.primary.name(),
                    bounds_type = %request.bounds_type,
                    "Primary generator returned no waypoints, falling back"
                );
                self.run_fallback(request)
            }
            Err(e) if e.is_input_rejection() || !self.enabled => Err(e),
            Err(e) => {
                warn!(
                    primary = self.primary.name(),
                    bounds_type = %request.bounds_type,
                    error = %e,
                    "Primary generator failed, falling back"
                );
                self.run_fallback(request)
            }
        }
    }
}

/// Orchestrator with the legacy generator as fallback.
pub type CompatibilityAdapter = FallbackGenerator<WaypointOrchestrator, LegacyGenerator>;

impl FallbackGenerator<WaypointOrchestrator, LegacyGenerator> {
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            WaypointOrchestrator::from_config(config),
            LegacyGenerator::from_config(config),
        )
        .with_fallback_enabled(config.fallback.enabled)
    }
}

impl Default for FallbackGenerator<WaypointOrchestrator, LegacyGenerator> {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
