//! Shape descriptors drawn by the user on the map.

use super::coordinate::Coordinate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance, in degrees, for deciding that a polyline closes on itself.
pub const CLOSED_RING_EPSILON: f64 = 1e-9;

/// Types of shapes a survey can be planned over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
    Polyline,
}

impl ShapeKind {
    /// Minimum number of boundary coordinates a usable shape needs.
    pub fn min_coordinates(self) -> usize {
        match self {
            ShapeKind::Rectangle => 2,
            ShapeKind::Circle => 1,
            ShapeKind::Polygon => 3,
            ShapeKind::Polyline => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Polyline => "polyline",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "polygon" => Ok(ShapeKind::Polygon),
            "polyline" | "line" => Ok(ShapeKind::Polyline),
            _ => Err(Error::UnknownShapeKind(s.to_string())),
        }
    }
}

/// A single shape submitted for waypoint generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "shapeKind", alias = "kind", alias = "type")]
    pub kind: ShapeKind,
    #[serde(default, alias = "coordinates")]
    pub boundary: Vec<Coordinate>,
    /// Circle radius in meters; falls back to the center coordinate's radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl ShapeDescriptor {
    /// Creates a new shape descriptor.
    pub fn new(id: impl Into<String>, kind: ShapeKind, boundary: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            kind,
            boundary,
            radius: None,
        }
    }

    /// Rectangle from two opposite corners.
    pub fn rectangle(id: impl Into<String>, corner_a: Coordinate, corner_b: Coordinate) -> Self {
        Self::new(id, ShapeKind::Rectangle, vec![corner_a, corner_b])
    }

    /// Circle from its center and radius in meters.
    pub fn circle(id: impl Into<String>, center: Coordinate, radius: f64) -> Self {
        Self {
            id: id.into(),
            kind: ShapeKind::Circle,
            boundary: vec![center],
            radius: Some(radius),
        }
    }

    pub fn polygon(id: impl Into<String>, vertices: Vec<Coordinate>) -> Self {
        Self::new(id, ShapeKind::Polygon, vertices)
    }

    pub fn polyline(id: impl Into<String>, vertices: Vec<Coordinate>) -> Self {
        Self::new(id, ShapeKind::Polyline, vertices)
    }

    /// True when the boundary carries enough coordinates for its kind.
    pub fn has_enough_coordinates(&self) -> bool {
        self.boundary.len() >= self.kind.min_coordinates()
    }

    /// Positive circle radius: the descriptor's own value first, then the center's.
    pub fn circle_radius(&self) -> Option<f64> {
        self.radius
            .filter(|r| r.is_finite() && *r > 0.0)
            .or_else(|| self.boundary.first().and_then(Coordinate::positive_radius))
    }

    /// A polyline is closed when its first and last coordinates coincide
    /// and at least three distinct vertices remain.
    pub fn is_closed_polyline(&self) -> bool {
        if self.kind != ShapeKind::Polyline || self.boundary.len() < 4 {
            return false;
        }
        match (self.boundary.first(), self.boundary.last()) {
            (Some(first), Some(last)) => first.same_position(last, CLOSED_RING_EPSILON),
            _ => false,
        }
    }

    /// Validates every boundary coordinate.
    pub fn validate_coordinates(&self) -> Result<()> {
        self.boundary.iter().try_for_each(Coordinate::validate)
    }
}
