//! Shape-specific waypoint generation strategies.

use crate::error::{PlanError, PlanResult};
use crate::geometry::{meters_to_degrees, meters_to_latitude_degrees};
use surveykit_core::{BoundingBox, Coordinate, GenerationParameters, ShapeDescriptor, Waypoint};
use surveykit_settings::LimitSettings;
use tracing::warn;

mod circle;
mod polygon;
mod polyline;
mod rectangle;

pub use circle::CircleStrategy;
pub use polygon::PolygonStrategy;
pub use polyline::PolylineStrategy;
pub use rectangle::RectangleStrategy;

pub(crate) use rectangle::sweep_bounding_box;

/// Turns one shape plus shared parameters into an ordered waypoint list.
///
/// Degenerate shapes (too few coordinates, no radius) yield an empty list.
/// Errors are reserved for inputs that cannot be planned at all.
pub trait ShapeStrategy: Send + Sync {
    /// Generate at most `limit` waypoints.
    fn generate_limited(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
        limit: usize,
    ) -> PlanResult<Vec<Waypoint>>;

    /// Generate with the default waypoint limit.
    fn generate(
        &self,
        shape: &ShapeDescriptor,
        params: &GenerationParameters,
    ) -> PlanResult<Vec<Waypoint>> {
        self.generate_limited(shape, params, LimitSettings::default().max_waypoints)
    }
}

/// Orientation of parallel scan lines.
///
/// `Columns` are lines of constant longitude flown north/south, `Rows` are
/// lines of constant latitude flown east/west. "Across" is the coordinate
/// that is constant along a line, "along" the one that varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SweepAxis {
    Columns,
    Rows,
}

impl SweepAxis {
    pub(crate) fn from_params(params: &GenerationParameters) -> Self {
        if params.is_north_south {
            SweepAxis::Columns
        } else {
            SweepAxis::Rows
        }
    }

    pub(crate) fn coordinate(self, across: f64, along: f64) -> Coordinate {
        match self {
            SweepAxis::Columns => Coordinate::new(along, across),
            SweepAxis::Rows => Coordinate::new(across, along),
        }
    }

    pub(crate) fn across(self, c: &Coordinate) -> f64 {
        match self {
            SweepAxis::Columns => c.longitude,
            SweepAxis::Rows => c.latitude,
        }
    }

    pub(crate) fn along(self, c: &Coordinate) -> f64 {
        match self {
            SweepAxis::Columns => c.latitude,
            SweepAxis::Rows => c.longitude,
        }
    }

    pub(crate) fn across_range(self, bbox: &BoundingBox) -> (f64, f64) {
        match self {
            SweepAxis::Columns => (bbox.min_lng, bbox.max_lng),
            SweepAxis::Rows => (bbox.min_lat, bbox.max_lat),
        }
    }

    pub(crate) fn along_range(self, bbox: &BoundingBox) -> (f64, f64) {
        match self {
            SweepAxis::Columns => (bbox.min_lat, bbox.max_lat),
            SweepAxis::Rows => (bbox.min_lng, bbox.max_lng),
        }
    }

    /// Degrees between adjacent lines for `meters` of spacing.
    pub(crate) fn across_step(self, meters: f64, at_latitude: f64) -> f64 {
        match self {
            SweepAxis::Columns => meters_to_degrees(meters, at_latitude),
            SweepAxis::Rows => meters_to_latitude_degrees(meters),
        }
    }

    /// Degrees along a line for `meters` of travel.
    pub(crate) fn along_step(self, meters: f64, at_latitude: f64) -> f64 {
        match self {
            SweepAxis::Columns => meters_to_latitude_degrees(meters),
            SweepAxis::Rows => meters_to_degrees(meters, at_latitude),
        }
    }

    /// Heading when flying toward increasing (`forward`) or decreasing "along".
    pub(crate) fn heading(self, forward: bool) -> f64 {
        match (self, forward) {
            (SweepAxis::Columns, true) => 0.0,
            (SweepAxis::Columns, false) => 180.0,
            (SweepAxis::Rows, true) => 90.0,
            (SweepAxis::Rows, false) => 270.0,
        }
    }
}

/// Line positions from `min` to `max`, `step` apart, closing on `max`.
///
/// A final line is placed on `max` when regular stepping stops short of it
/// by more than 1% of a step.
pub(crate) fn scan_line_positions(
    min: f64,
    max: f64,
    step: f64,
    limit: usize,
) -> PlanResult<Vec<f64>> {
    let span = max - min;
    if span <= 0.0 {
        return Ok(vec![min]);
    }
    if !(step.is_finite() && step > 0.0) {
        return Ok(vec![min, max]);
    }

    let regular = (span / step).floor();
    if regular + 2.0 > limit as f64 {
        return Err(PlanError::WaypointLimitExceeded { limit });
    }

    let mut positions: Vec<f64> = (0..=regular as usize)
        .map(|k| min + k as f64 * step)
        .filter(|p| *p <= max)
        .collect();
    if let Some(&last) = positions.last() {
        if max - last > step * 0.01 {
            positions.push(max);
        }
    }
    Ok(positions)
}

/// Cell-centred positions from `min` to `max`, `step` apart, starting half
/// a step in.
///
/// An extent narrower than half a step still gets its mid-line.
pub(crate) fn centred_positions(min: f64, max: f64, step: f64) -> Vec<f64> {
    let positions: Vec<f64> = (0..)
        .map(|k| min + step * (k as f64 + 0.5))
        .take_while(|&p| p < max)
        .collect();
    if positions.is_empty() {
        vec![(min + max) / 2.0]
    } else {
        positions
    }
}

/// Number of evenly spaced points on a line of `length` meters, one per
/// `distance_per_photo` meters and never fewer than the two ends.
pub(crate) fn points_on_line(length: f64, distance_per_photo: Option<f64>) -> usize {
    match distance_per_photo {
        Some(d) if length.is_finite() => ((length / d).floor() as usize).saturating_add(1).max(2),
        _ => 2,
    }
}

/// Checks the shape's coordinates before any geometry runs.
pub(crate) fn validate_boundary(shape: &ShapeDescriptor) -> PlanResult<()> {
    shape.validate_coordinates().map_err(PlanError::from)
}

/// Picks the caller's value when usable, otherwise the configured default.
pub(crate) fn positive_or_default(name: &str, value: f64, default: f64, shape_id: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(shape_id, value, default, "Non-positive {}, substituting default", name);
        default
    }
}
