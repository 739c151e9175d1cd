//! Geographic coordinates and bounding boxes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in degrees.
///
/// `radius` (meters) is only meaningful when the coordinate is a circle center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Coordinate {
    /// Creates a coordinate without a radius.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: None,
        }
    }

    /// Creates a circle center carrying its radius in meters.
    pub fn with_radius(latitude: f64, longitude: f64, radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: Some(radius),
        }
    }

    /// True when both components are finite and inside the WGS-84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    /// Checks the coordinate, returning a descriptive error when it is unusable.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(self.invalid("non-finite component"));
        }
        if self.latitude.abs() > 90.0 {
            return Err(self.invalid("latitude out of range"));
        }
        if self.longitude.abs() > 180.0 {
            return Err(self.invalid("longitude out of range"));
        }
        Ok(())
    }

    /// Positive radius, if any.
    pub fn positive_radius(&self) -> Option<f64> {
        self.radius.filter(|r| r.is_finite() && *r > 0.0)
    }

    /// True when both coordinates describe the same position within `epsilon` degrees.
    pub fn same_position(&self, other: &Coordinate, epsilon: f64) -> bool {
        (self.latitude - other.latitude).abs() <= epsilon
            && (self.longitude - other.longitude).abs() <= epsilon
    }

    fn invalid(&self, reason: &str) -> Error {
        Error::InvalidCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
            reason: reason.to_string(),
        }
    }
}

/// Axis-aligned latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Smallest box containing every coordinate. `None` for an empty slice.
    pub fn from_coordinates(coords: &[Coordinate]) -> Option<Self> {
        let first = coords.first()?;
        let mut bbox = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        for c in &coords[1..] {
            bbox.min_lat = bbox.min_lat.min(c.latitude);
            bbox.max_lat = bbox.max_lat.max(c.latitude);
            bbox.min_lng = bbox.min_lng.min(c.longitude);
            bbox.max_lng = bbox.max_lng.max(c.longitude);
        }
        Some(bbox)
    }

    /// Inclusive containment test.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// South-west corner.
    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.min_lat, self.min_lng)
    }

    /// North-east corner.
    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.max_lat, self.max_lng)
    }
}
