use super::{
    points_on_line, positive_or_default, scan_line_positions, validate_boundary, ShapeStrategy,
    SweepAxis,
};
use crate::builder::WaypointBuilder;
use crate::camera::EffectiveParameters;
use crate::error::PlanResult;
use crate::geometry::distance_between;
use surveykit_core::{BoundingBox, GenerationParameters, ShapeDescriptor, Waypoint};
use surveykit_settings::DefaultSettings;
use tracing::debug;

/// Boustrophedon coverage of an axis-aligned rectangle.
///
/// The first two boundary coordinates are opposite corners, in any order.
#[derive(Debug, Clone, Default)]
pub struct RectangleStrategy {
    defaults: DefaultSettings,
}

impl RectangleStrategy {
    pub fn new(defaults: DefaultSettings) -> Self {
        Self { defaults }
    }
}

impl ShapeStrategy for RectangleStrategy {
    fn generate_limited(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>> {
        if shape.boundary.len() < 2 {
            return Ok(Vec::new());
        }
        validate_boundary(shape)?;

        let Some(bbox) = BoundingBox::from_coordinates(&shape.boundary[..2]) else {
            return Ok(Vec::new());
        };
        let effective = EffectiveParameters::resolve(params)?;
        let spacing = positive_or_default(
            "line_spacing",
            effective.line_spacing,
            self.defaults.line_spacing,
            &shape.id,
        );

        let mut builder =
            WaypointBuilder::new(params, limit).with_flight(params.altitude, effective.speed);
        sweep_bounding_box(
            &mut builder,
            SweepAxis::from_params(params),
            &bbox,
            spacing,
            params.use_endpoints_only,
            effective.distance_per_photo(),
        )?;

        debug!(shape_id = %shape.id, count = builder.len(), "Generated rectangle waypoints");
        Ok(builder.finish())
    }
}

/// Zig-zag over a bounding box, one scan line every `spacing` meters.
///
/// With `endpoints_only` each line contributes its two ends and lines are
/// taken in pairs, the second reversed. Otherwise each line is subdivided
/// into one waypoint per `distance_per_photo` meters.
pub(crate) fn sweep_bounding_box(
    builder: &mut WaypointBuilder,
    axis: SweepAxis,
    bbox: &BoundingBox,
    spacing: f64,
    endpoints_only: bool,
    distance_per_photo: Option<f64>,
) -> PlanResult<()> {
    let (across_min, across_max) = axis.across_range(bbox);
    let (along_min, along_max) = axis.along_range(bbox);
    let step = axis.across_step(spacing, bbox.min_lat);
    let lines = scan_line_positions(across_min, across_max, step, builder.remaining())?;

    let mut emit = |across: f64, forward: bool, points: usize| -> PlanResult<()> {
        builder.reserve(points)?;
        let (from, to) = if forward {
            (along_min, along_max)
        } else {
            (along_max, along_min)
        };
        let heading = axis.heading(forward);
        for i in 0..points {
            let along = if i + 1 == points {
                to
            } else {
                from + (to - from) * (i as f64 / (points - 1) as f64)
            };
            let c = axis.coordinate(across, along);
            builder.push(c.latitude, c.longitude, heading)?;
        }
        Ok(())
    };

    if endpoints_only {
        for pair in lines.chunks(2) {
            emit(pair[0], true, 2)?;
            if let Some(&second) = pair.get(1) {
                emit(second, false, 2)?;
            }
        }
    } else {
        for (i, &across) in lines.iter().enumerate() {
            let length = distance_between(
                &axis.coordinate(across, along_min),
                &axis.coordinate(across, along_max),
            );
            emit(across, i % 2 == 0, points_on_line(length, distance_per_photo))?;
        }
    }

    Ok(())
}
