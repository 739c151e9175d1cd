use super::{
    centred_positions, points_on_line, positive_or_default, validate_boundary, ShapeStrategy,
    SweepAxis,
};
use crate::builder::WaypointBuilder;
use crate::camera::EffectiveParameters;
use crate::error::{PlanError, PlanResult};
use crate::geometry::{distance_between, find_intersection, initial_bearing, interpolate};
use surveykit_core::{BoundingBox, Coordinate, GenerationParameters, ShapeDescriptor, Waypoint};
use surveykit_settings::DefaultSettings;
use tracing::{debug, warn};

/// Degrees each clipped span is pulled in from the boundary.
pub const BOUNDARY_INSET_DEG: f64 = 1e-7;

/// Degrees a scan line is shifted when its crossing count comes out odd.
const RETRY_NUDGE_DEG: f64 = 1e-6;

/// Degrees the scan segment overhangs the ring's bounding box.
const SCAN_OVERHANG_DEG: f64 = 1e-6;

/// Follows an open path, or covers the area of a closed ring.
///
/// A polyline with at least four coordinates whose first and last coincide
/// is treated as a closed ring and filled with clipped scan lines.
#[derive(Debug, Clone, Default)]
pub struct PolylineStrategy {
    defaults: DefaultSettings,
}

/// Flight values after substituting defaults.
struct Flight {
    altitude: f64,
    speed: f64,
    spacing: f64,
    distance_per_photo: f64,
}

impl PolylineStrategy {
    pub fn new(defaults: DefaultSettings) -> Self {
        Self { defaults }
    }

    fn flight(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
    ) -> PlanResult<Flight> {
        let defaults = &self.defaults;
        let effective = EffectiveParameters::resolve(params)?;
        Ok(Flight {
            altitude: positive_or_default(
                "altitude",
                params.altitude,
                defaults.altitude,
                &shape.id,
            ),
            speed: positive_or_default("speed", effective.speed, defaults.speed, &shape.id),
            spacing: positive_or_default(
                "line_spacing",
                effective.line_spacing,
                defaults.line_spacing,
                &shape.id,
            ),
            distance_per_photo: effective
                .distance_per_photo()
                .unwrap_or(defaults.fallback_photo_spacing),
        })
    }

    fn follow_path(
        &self,
        vertices: &[Coordinate],
        flight: &Flight,
        endpoints_only: bool,
        builder: &mut WaypointBuilder,
    ) -> PlanResult<()> {
        let mut heading = 0.0;
        for (i, vertex) in vertices.iter().enumerate() {
            let next = vertices.get(i + 1);
            if let Some(next) = next {
                heading = initial_bearing(
                    vertex.latitude,
                    vertex.longitude,
                    next.latitude,
                    next.longitude,
                );
            }
            builder.push(vertex.latitude, vertex.longitude, heading)?;

            let Some(next) = next else { continue };
            if endpoints_only {
                continue;
            }
            let length = distance_between(vertex, next);
            let intermediate =
                ((length / flight.distance_per_photo).ceil() as usize).saturating_sub(1);
            builder.reserve(intermediate)?;
            for j in 1..=intermediate {
                let p = interpolate(vertex, next, j as f64 / (intermediate + 1) as f64);
                builder.push(p.latitude, p.longitude, heading)?;
            }
        }
        Ok(())
    }

    fn cover_ring(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        flight: &Flight,
        builder: &mut WaypointBuilder,
    ) -> PlanResult<()> {
        // Drop the duplicated closing vertex; edges wrap around.
        let ring = &shape.boundary[..shape.boundary.len() - 1];
        let Some(bbox) = BoundingBox::from_coordinates(ring) else {
            return Ok(());
        };

        let axis = SweepAxis::from_params(params);
        let (across_min, across_max) = axis.across_range(&bbox);
        let step = axis.across_step(flight.spacing, bbox.min_lat);
        if !(step > 0.0) {
            return Err(PlanError::DegenerateGeometry(format!(
                "line spacing of {} m collapses at latitude {}",
                flight.spacing, bbox.min_lat
            )));
        }
        if (across_max - across_min) / step > builder.remaining() as f64 {
            return Err(PlanError::WaypointLimitExceeded {
                limit: builder.remaining(),
            });
        }

        let mut productive = 0usize;
        for across in centred_positions(across_min, across_max, step) {
            let crossings = crossings_with_retry(&shape.id, across, |line| {
                ring_crossings(ring, axis, &bbox, line)
            })?;

            let mut spans: Vec<(f64, f64)> = crossings
                .chunks_exact(2)
                .map(|pair| (pair[0] + BOUNDARY_INSET_DEG, pair[1] - BOUNDARY_INSET_DEG))
                .filter(|(start, end)| start < end)
                .collect();
            if spans.is_empty() {
                continue;
            }

            let forward = productive % 2 == 0;
            if !forward {
                spans.reverse();
            }
            productive += 1;
            let heading = axis.heading(forward);

            for (start, end) in spans {
                let (from, to) = if forward { (start, end) } else { (end, start) };
                let a = axis.coordinate(across, from);
                let b = axis.coordinate(across, to);
                let points = if params.use_endpoints_only {
                    2
                } else {
                    points_on_line(distance_between(&a, &b), Some(flight.distance_per_photo))
                };
                builder.reserve(points)?;
                for i in 0..points {
                    let p = if i + 1 == points {
                        b
                    } else {
                        interpolate(&a, &b, i as f64 / (points - 1) as f64)
                    };
                    builder.push(p.latitude, p.longitude, heading)?;
                }
            }
        }
        Ok(())
    }
}

/// Crossings of the scan line at `across`, retried once slightly shifted
/// when the count comes out odd.
fn crossings_with_retry<F>(shape_id: &str, across: f64, crossings: F) -> PlanResult<Vec<f64>>
where
    F: Fn(f64) -> Option<Vec<f64>>,
{
    if let Some(found) = crossings(across) {
        return Ok(found);
    }
    warn!(shape_id, across, "Odd crossing count, retrying nudged scan line");
    crossings(across + RETRY_NUDGE_DEG).ok_or_else(|| {
        PlanError::DegenerateGeometry(format!(
            "scan line at {across} crosses the ring of '{shape_id}' an odd number of times"
        ))
    })
}

/// Sorted "along" positions where the scan line at `across` crosses the ring.
///
/// Edges are counted with the half-open rule (one endpoint inclusive) so a
/// line through a vertex is counted once. Returns `None` on an odd count.
fn ring_crossings(
    ring: &[Coordinate],
    axis: SweepAxis,
    bbox: &BoundingBox,
    across: f64,
) -> Option<Vec<f64>> {
    let (along_min, along_max) = axis.along_range(bbox);
    let scan_start = axis.coordinate(across, along_min - SCAN_OVERHANG_DEG);
    let scan_end = axis.coordinate(across, along_max + SCAN_OVERHANG_DEG);

    let mut crossings: Vec<f64> = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .filter(|(a, b)| (axis.across(a) > across) != (axis.across(b) > across))
        .filter_map(|(a, b)| find_intersection(&scan_start, &scan_end, a, b))
        .map(|p| axis.along(&p))
        .collect();

    if crossings.len() % 2 != 0 {
        return None;
    }
    crossings.sort_by(|a, b| a.total_cmp(b));
    Some(crossings)
}

impl ShapeStrategy for PolylineStrategy {
    fn generate_limited(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>> {
        if shape.boundary.is_empty() {
            return Ok(Vec::new());
        }
        validate_boundary(shape)?;

        let flight = self.flight(shape, params)?;
        let mut builder =
            WaypointBuilder::new(params, limit).with_flight(flight.altitude, flight.speed);

        let closed = shape.is_closed_polyline();
        if closed {
            self.cover_ring(shape, params, &flight, &mut builder)?;
        } else {
            self.follow_path(&shape.boundary, &flight, params.use_endpoints_only, &mut builder)?;
        }

        debug!(
            shape_id = %shape.id,
            closed,
            count = builder.len(),
            "Generated polyline waypoints"
        );
        Ok(builder.finish())
    }
}
