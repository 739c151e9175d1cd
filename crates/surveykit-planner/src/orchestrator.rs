//! Batch planning across heterogeneous shapes.
//!
//! The orchestrator dispatches each shape to its strategy, threads a single
//! index cursor through the batch and enforces the waypoint budget for the
//! whole request.

use crate::error::{PlanError, PlanResult};
use crate::request::{LegacyRequest, PlanRequest};
use crate::strategies::{
    CircleStrategy, PolygonStrategy, PolylineStrategy, RectangleStrategy, ShapeStrategy,
};
use serde::{Serialize, Serializer};
use surveykit_core::{GenerationParameters, ShapeDescriptor, ShapeKind, Waypoint};
use surveykit_settings::{DefaultSettings, LimitSettings, PlannerConfig};
use tracing::{debug, warn};

/// A shape that produced no waypoints because its strategy failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeFailure {
    pub shape_id: String,
    pub kind: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: PlanError,
}

fn serialize_display<S: Serializer>(error: &PlanError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Waypoints of a batch plus the shapes that were skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub waypoints: Vec<Waypoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ShapeFailure>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct WaypointOrchestrator {
    rectangle: RectangleStrategy,
    circle: CircleStrategy,
    polygon: PolygonStrategy,
    polyline: PolylineStrategy,
    limits: LimitSettings,
    defaults: DefaultSettings,
}

impl Default for WaypointOrchestrator {
    fn default() -> Self {
        Self::with_settings(LimitSettings::default(), DefaultSettings::default())
    }
}

impl WaypointOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::with_settings(config.limits.clone(), config.defaults.clone())
    }

    pub fn with_settings(limits: LimitSettings, defaults: DefaultSettings) -> Self {
        Self {
            rectangle: RectangleStrategy::new(defaults.clone()),
            circle: CircleStrategy::new(),
            polygon: PolygonStrategy::new(defaults.clone()),
            polyline: PolylineStrategy::new(defaults.clone()),
            limits,
            defaults,
        }
    }

    fn strategy(&self, kind: ShapeKind) -> &dyn ShapeStrategy {
        match kind {
            ShapeKind::Rectangle => &self.rectangle,
            ShapeKind::Circle => &self.circle,
            ShapeKind::Polygon => &self.polygon,
            ShapeKind::Polyline => &self.polyline,
        }
    }

    /// Plan a single shape with at most `limit` waypoints.
    pub fn generate_shape(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>> {
        self.strategy(shape.kind).generate_limited(shape, params, limit)
    }

    /// Plan every shape in order; failed shapes are skipped.
    pub fn generate(
        &self,
        shapes: &[ShapeDescriptor],
        params: &GenerationParameters,
    ) -> Vec<Waypoint> {
        self.generate_report(shapes, params).waypoints
    }

    /// Plan every shape in order and report the ones that failed.
    pub fn generate_report(
        &self,
        shapes: &[ShapeDescriptor],
        params: &GenerationParameters,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();
        let mut cursor = params.starting_index;

        for shape in shapes {
            let budget = self.limits.max_waypoints.saturating_sub(report.waypoints.len());
            let shape_params = params.with_starting_index(cursor);

            match self.generate_shape(shape, &shape_params, budget) {
                Ok(waypoints) => {
                    debug!(
                        shape_id = %shape.id,
                        kind = %shape.kind,
                        count = waypoints.len(),
                        "Shape planned"
                    );
                    if let Some(max_index) = waypoints.iter().map(|w| w.index).max() {
                        cursor = max_index.saturating_add(1);
                    }
                    report.waypoints.extend(waypoints);
                }
                Err(error) => {
                    warn!(
                        shape_id = %shape.id,
                        kind = %shape.kind,
                        error = %error,
                        "Shape failed, skipping"
                    );
                    report.failures.push(ShapeFailure {
                        shape_id: shape.id.clone(),
                        kind: shape.kind.to_string(),
                        error,
                    });
                }
            }
        }

        report
    }

    /// Plan a full request, including shapes whose kind was not recognised.
    pub fn generate_request(&self, request: &PlanRequest) -> GenerationReport {
        let (shapes, mut failures) = request.descriptors();
        let mut report = self.generate_report(&shapes, &request.params);
        failures.append(&mut report.failures);
        report.failures = failures;
        report
    }

    /// Plan a request in the older single-shape form.
    ///
    /// When the lone shape failed and nothing was produced, its error is
    /// returned so a caller can decide whether to fall back.
    pub fn generate_legacy(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        let shapes = request.to_shapes(&self.defaults)?;
        let report = self.generate_report(&shapes, &request.to_parameters());
        match report.failures.into_iter().next() {
            Some(failure) if report.waypoints.is_empty() => Err(failure.error),
            _ => Ok(report.waypoints),
        }
    }
}
