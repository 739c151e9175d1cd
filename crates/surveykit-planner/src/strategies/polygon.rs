use super::{centred_positions, positive_or_default, validate_boundary, ShapeStrategy, SweepAxis};
use crate::builder::WaypointBuilder;
use crate::camera::EffectiveParameters;
use crate::error::{PlanError, PlanResult};
use crate::geometry::is_point_in_polygon;
use surveykit_core::{BoundingBox, GenerationParameters, ShapeDescriptor, ShapeKind, Waypoint};
use surveykit_settings::DefaultSettings;
use tracing::debug;

/// Sub-steps per line spacing when sampling along a scan line.
const SAMPLES_PER_SPACING: f64 = 10.0;

/// Raster coverage of an arbitrary simple polygon.
///
/// Scan lines are sampled at a tenth of the line spacing and only interior
/// samples are kept. `photo_interval` is read as a waypoint stride here:
/// every `photo_stride`-th waypoint of a line carries the photo action.
#[derive(Debug, Clone, Default)]
pub struct PolygonStrategy {
    defaults: DefaultSettings,
}

impl PolygonStrategy {
    pub fn new(defaults: DefaultSettings) -> Self {
        Self { defaults }
    }

    /// Waypoint stride between photo actions, at least 1.
    pub fn photo_stride(photo_interval: f64) -> usize {
        if photo_interval.is_finite() && photo_interval >= 1.0 {
            photo_interval.round() as usize
        } else {
            1
        }
    }
}

impl ShapeStrategy for PolygonStrategy {
    fn generate_limited(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>> {
        if shape.boundary.len() < ShapeKind::Polygon.min_coordinates() {
            return Ok(Vec::new());
        }
        validate_boundary(shape)?;

        let Some(bbox) = BoundingBox::from_coordinates(&shape.boundary) else {
            return Ok(Vec::new());
        };
        let effective = EffectiveParameters::resolve(params)?;
        let spacing = positive_or_default(
            "line_spacing",
            effective.line_spacing,
            self.defaults.line_spacing,
            &shape.id,
        );

        let axis = SweepAxis::from_params(params);
        let (across_min, across_max) = axis.across_range(&bbox);
        let (along_min, along_max) = axis.along_range(&bbox);
        let step = axis.across_step(spacing, bbox.min_lat);
        let sub_step = axis.along_step(spacing / SAMPLES_PER_SPACING, bbox.min_lat);
        if !(step > 0.0 && sub_step > 0.0) {
            return Err(PlanError::DegenerateGeometry(format!(
                "line spacing of {spacing} m collapses at latitude {}",
                bbox.min_lat
            )));
        }

        let line_count = ((across_max - across_min) / step).ceil();
        if line_count > limit as f64 {
            return Err(PlanError::WaypointLimitExceeded { limit });
        }

        let stride = Self::photo_stride(params.photo_interval);
        let photo_action = self.defaults.photo_action.as_str();
        let mut builder =
            WaypointBuilder::new(params, limit).with_flight(params.altitude, effective.speed);
        let samples = centred_positions(along_min, along_max, sub_step);
        let mut productive = 0usize;

        for across in centred_positions(across_min, across_max, step) {
            let mut inside: Vec<f64> = samples
                .iter()
                .copied()
                .filter(|&along| {
                    let c = axis.coordinate(across, along);
                    is_point_in_polygon(&shape.boundary, c.latitude, c.longitude)
                })
                .collect();
            if inside.is_empty() {
                continue;
            }

            let forward = productive % 2 == 0;
            if !forward {
                inside.reverse();
            }
            productive += 1;

            let heading = axis.heading(forward);
            builder.reserve(inside.len())?;
            for (position, along) in inside.into_iter().enumerate() {
                let c = axis.coordinate(across, along);
                if position % stride == 0 {
                    builder.push_with_action(c.latitude, c.longitude, heading, photo_action)?;
                } else {
                    builder.push(c.latitude, c.longitude, heading)?;
                }
            }
        }

        debug!(
            shape_id = %shape.id,
            lines = productive,
            count = builder.len(),
            "Generated polygon waypoints"
        );
        Ok(builder.finish())
    }
}
