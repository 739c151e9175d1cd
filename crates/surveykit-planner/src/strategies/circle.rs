use super::{validate_boundary, ShapeStrategy};
use crate::builder::WaypointBuilder;
use crate::camera::EffectiveParameters;
use crate::error::{PlanError, PlanResult};
use crate::geometry::destination_point;
use std::f64::consts::PI;
use surveykit_core::{GenerationParameters, ShapeDescriptor, Waypoint};
use tracing::debug;

/// Fewest waypoints placed on a circle.
pub const MIN_CIRCLE_WAYPOINTS: usize = 24;

/// Centres this close to (0, 0) are rejected as a likely upstream unit bug.
pub const NULL_ISLAND_TOLERANCE_DEG: f64 = 0.001;

/// Orbit around a centre at a fixed radius, camera facing inward.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleStrategy;

impl CircleStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Number of waypoints on the perimeter.
    pub fn waypoint_count(radius: f64, distance_per_photo: Option<f64>) -> usize {
        match distance_per_photo {
            Some(d) => ((2.0 * PI * radius / d).floor() as usize).max(MIN_CIRCLE_WAYPOINTS),
            None => MIN_CIRCLE_WAYPOINTS,
        }
    }
}

impl ShapeStrategy for CircleStrategy {
    fn generate_limited(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>> {
        let (Some(center), Some(radius)) = (shape.boundary.first(), shape.circle_radius()) else {
            return Ok(Vec::new());
        };
        validate_boundary(shape)?;

        if center.latitude.abs() < NULL_ISLAND_TOLERANCE_DEG
            && center.longitude.abs() < NULL_ISLAND_TOLERANCE_DEG
        {
            return Err(PlanError::AmbiguousInput(format!(
                "circle centre ({}, {}) is at the origin; coordinates were probably not converted",
                center.latitude, center.longitude
            )));
        }

        let effective = EffectiveParameters::resolve(params)?;
        let count = Self::waypoint_count(radius, effective.distance_per_photo());

        let mut builder =
            WaypointBuilder::new(params, limit).with_flight(params.altitude, effective.speed);
        builder.reserve(count)?;
        for i in 0..count {
            let bearing = i as f64 * 360.0 / count as f64;
            let point = destination_point(center.latitude, center.longitude, bearing, radius);
            builder.push(point.latitude, point.longitude, bearing + 180.0)?;
        }

        debug!(shape_id = %shape.id, radius, count, "Generated circle waypoints");
        Ok(builder.finish())
    }
}
