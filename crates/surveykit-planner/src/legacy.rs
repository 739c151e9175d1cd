//! Shape-agnostic fallback generator.
//!
//! Flies a plain zig-zag over the bounding box of whatever bounds the
//! request carries. Used when the shape-aware path yields nothing.

use crate::builder::WaypointBuilder;
use crate::error::{PlanError, PlanResult};
use crate::geometry::{meters_to_degrees, meters_to_latitude_degrees};
use crate::request::LegacyRequest;
use crate::strategies::{sweep_bounding_box, SweepAxis};
use surveykit_core::{BoundingBox, Coordinate, ShapeKind, Waypoint};
use surveykit_settings::{DefaultSettings, LimitSettings, PlannerConfig};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct LegacyGenerator {
    limits: LimitSettings,
    defaults: DefaultSettings,
}

impl LegacyGenerator {
    pub fn new(limits: LimitSettings, defaults: DefaultSettings) -> Self {
        Self { limits, defaults }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.limits.clone(), config.defaults.clone())
    }

    /// Area flown for the request's bounds.
    ///
    /// A lone bound with a radius expands to the square around that circle.
    fn coverage_box(&self, request: &LegacyRequest) -> PlanResult<BoundingBox> {
        let bounds = &request.bounds;
        if let [center] = bounds.as_slice() {
            if let Some(radius) = center.positive_radius() {
                let dlat = meters_to_latitude_degrees(radius);
                let dlng = meters_to_degrees(radius, center.latitude);
                return Ok(BoundingBox {
                    min_lat: (center.latitude - dlat).max(-90.0),
                    max_lat: (center.latitude + dlat).min(90.0),
                    min_lng: (center.longitude - dlng).max(-180.0),
                    max_lng: (center.longitude + dlng).min(180.0),
                });
            }
        }

        match BoundingBox::from_coordinates(bounds) {
            Some(bbox) if bounds.len() >= 2 => Ok(bbox),
            _ => Err(PlanError::InsufficientCoordinates {
                kind: request.shape_kind().unwrap_or(ShapeKind::Rectangle),
                required: 2,
                found: bounds.len(),
            }),
        }
    }

    pub fn generate(&self, request: &LegacyRequest) -> PlanResult<Vec<Waypoint>> {
        request
            .bounds
            .iter()
            .try_for_each(Coordinate::validate)
            .map_err(PlanError::from)?;
        let bbox = self.coverage_box(request)?;

        let params = request.to_parameters();
        let positive = |value: f64, default: f64| if value > 0.0 { value } else { default };
        let altitude = positive(params.altitude, self.defaults.altitude);
        let speed = positive(params.speed, self.defaults.speed);
        let spacing = positive(params.line_spacing, self.defaults.line_spacing);
        let per_photo = speed * params.photo_interval;
        let distance_per_photo = (per_photo > 0.0).then_some(per_photo);

        let mut builder =
            WaypointBuilder::new(&params, self.limits.max_waypoints).with_flight(altitude, speed);
        sweep_bounding_box(
            &mut builder,
            SweepAxis::from_params(&params),
            &bbox,
            spacing,
            params.use_endpoints_only,
            distance_per_photo,
        )?;

        debug!(
            bounds_type = %request.bounds_type,
            count = builder.len(),
            "Generated legacy waypoints"
        );
        Ok(builder.finish())
    }
}
