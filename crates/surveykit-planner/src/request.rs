//! Request documents accepted by the planner.
//!
//! [`PlanRequest`] is the batch form (many shapes, shared parameters);
//! [`LegacyRequest`] is the older single-shape form kept for existing
//! callers.

use crate::error::{PlanError, PlanResult};
use crate::orchestrator::ShapeFailure;
use serde::{Deserialize, Serialize};
use surveykit_core::{
    Coordinate, GenerationParameters, MeasurementSystem, ShapeDescriptor, ShapeKind,
};
use surveykit_settings::DefaultSettings;
use tracing::warn;

/// A shape as submitted, before its kind tag has been checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInput {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "shapeKind", alias = "kind", alias = "type")]
    pub kind: String,
    #[serde(default, alias = "coordinates")]
    pub boundary: Vec<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl ShapeInput {
    pub fn to_descriptor(&self) -> PlanResult<ShapeDescriptor> {
        let kind: ShapeKind = self
            .kind
            .parse()
            .map_err(|_| PlanError::UnknownShapeKind(self.kind.clone()))?;
        Ok(ShapeDescriptor {
            id: self.id.clone(),
            kind,
            boundary: self.boundary.clone(),
            radius: self.radius,
        })
    }
}

impl From<ShapeDescriptor> for ShapeInput {
    fn from(shape: ShapeDescriptor) -> Self {
        Self {
            id: shape.id,
            kind: shape.kind.to_string(),
            boundary: shape.boundary,
            radius: shape.radius,
        }
    }
}

/// Batch request: heterogeneous shapes flown with one set of parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub shapes: Vec<ShapeInput>,
    #[serde(default, alias = "parameters")]
    pub params: GenerationParameters,
}

impl PlanRequest {
    pub fn new(shapes: Vec<ShapeDescriptor>, params: GenerationParameters) -> Self {
        Self {
            shapes: shapes.into_iter().map(ShapeInput::from).collect(),
            params,
        }
    }

    /// Splits the submitted shapes into plannable descriptors and
    /// failures for unrecognised kinds, preserving order.
    pub fn descriptors(&self) -> (Vec<ShapeDescriptor>, Vec<ShapeFailure>) {
        let mut shapes = Vec::with_capacity(self.shapes.len());
        let mut failures = Vec::new();
        for input in &self.shapes {
            match input.to_descriptor() {
                Ok(shape) => shapes.push(shape),
                Err(error) => {
                    warn!(
                        shape_id = %input.id,
                        kind = %input.kind,
                        "Skipping shape with unknown kind"
                    );
                    failures.push(ShapeFailure {
                        shape_id: input.id.clone(),
                        kind: input.kind.clone(),
                        error,
                    });
                }
            }
        }
        (shapes, failures)
    }
}

/// Single-shape request in the older call signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRequest {
    #[serde(default)]
    pub action: String,
    /// 0 metric, 1 imperial
    #[serde(default)]
    pub unit_type: i32,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub speed: f64,
    /// Accepted for compatibility; not used by any generator
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub line_spacing: f64,
    #[serde(default)]
    pub bounds: Vec<Coordinate>,
    pub bounds_type: String,
    #[serde(default)]
    pub starting_index: u32,
    #[serde(default)]
    pub photo_interval: f64,
    #[serde(default)]
    pub use_endpoints_only: bool,
    #[serde(default)]
    pub is_north_south: bool,
}

impl LegacyRequest {
    pub fn new(bounds_type: impl Into<String>, bounds: Vec<Coordinate>) -> Self {
        Self {
            action: String::new(),
            unit_type: 0,
            altitude: 0.0,
            speed: 0.0,
            angle: 0.0,
            line_spacing: 0.0,
            bounds,
            bounds_type: bounds_type.into(),
            starting_index: 0,
            photo_interval: 0.0,
            use_endpoints_only: false,
            is_north_south: false,
        }
    }

    pub fn shape_kind(&self) -> PlanResult<ShapeKind> {
        self.bounds_type
            .parse()
            .map_err(|_| PlanError::UnknownShapeKind(self.bounds_type.clone()))
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        MeasurementSystem::from_unit_type(self.unit_type)
    }

    /// Translate into the one-shape list the orchestrator plans.
    ///
    /// A circle takes its centre and radius from the first bound, with
    /// `defaults.circle_radius` when that radius is missing or not positive.
    pub fn to_shapes(&self, defaults: &DefaultSettings) -> PlanResult<Vec<ShapeDescriptor>> {
        let kind = self.shape_kind()?;
        let id = format!("legacy-{kind}");
        let shape = match kind {
            ShapeKind::Circle => ShapeDescriptor {
                id,
                kind,
                boundary: self.bounds.iter().take(1).copied().collect(),
                radius: Some(
                    self.bounds
                        .first()
                        .and_then(Coordinate::positive_radius)
                        .unwrap_or(defaults.circle_radius),
                ),
            },
            ShapeKind::Rectangle | ShapeKind::Polygon | ShapeKind::Polyline => {
                ShapeDescriptor::new(id, kind, self.bounds.clone())
            }
        };
        Ok(vec![shape])
    }

    pub fn to_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            altitude: self.altitude,
            speed: self.speed,
            line_spacing: self.line_spacing,
            starting_index: self.starting_index,
            action: self.action.clone(),
            photo_interval: self.photo_interval,
            use_endpoints_only: self.use_endpoints_only,
            is_north_south: self.is_north_south,
            unit_type: self.measurement_system(),
            camera: None,
        }
    }
}
