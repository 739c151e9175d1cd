//! Geodesic and planar geometry primitives.
//!
//! Everything here is a pure function over WGS-84 degrees and meters.
//! Planar primitives (orientation, intersection) treat longitude as x and
//! latitude as y; they are used for clipping scan lines against shape
//! boundaries, where the local distortion is irrelevant.

use std::f64::consts::PI;
use surveykit_core::{Coordinate, Waypoint};

/// WGS-84 equatorial radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Collinearity tolerance for the planar primitives.
pub const EPSILON: f64 = 1e-10;

/// Below this `cos(latitude)` the longitude scale is treated as zero.
const POLE_COS_EPSILON: f64 = 1e-12;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = EARTH_RADIUS_M * PI / 180.0;

/// Great-circle distance in meters (haversine formula).
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Haversine distance between two coordinates.
pub fn distance_between(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

fn meters_per_degree_lng(at_latitude: f64) -> f64 {
    let cos_lat = at_latitude.to_radians().cos();
    if cos_lat.abs() < POLE_COS_EPSILON {
        0.0
    } else {
        EARTH_RADIUS_M * cos_lat * PI / 180.0
    }
}

/// Converts an east-west distance in meters to degrees of longitude.
///
/// Returns 0 near the poles where the conversion is undefined.
pub fn meters_to_degrees(meters: f64, at_latitude: f64) -> f64 {
    let per_degree = meters_per_degree_lng(at_latitude);
    if per_degree == 0.0 {
        0.0
    } else {
        meters / per_degree
    }
}

/// Converts degrees of longitude to an east-west distance in meters.
pub fn degrees_to_meters(degrees: f64, at_latitude: f64) -> f64 {
    degrees * meters_per_degree_lng(at_latitude)
}

/// Converts a north-south distance in meters to degrees of latitude.
pub fn meters_to_latitude_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE_LAT
}

/// Converts degrees of latitude to a north-south distance in meters.
pub fn latitude_degrees_to_meters(degrees: f64) -> f64 {
    degrees * METERS_PER_DEGREE_LAT
}

/// Even-odd ray casting test. The ring does not need to be closed.
pub fn is_point_in_polygon(vertices: &[Coordinate], lat: f64, lng: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = &vertices[i];
        let vj = &vertices[j];
        if (vi.latitude > lat) != (vj.latitude > lat) {
            let crossing_lng = vi.longitude
                + (lat - vi.latitude) * (vj.longitude - vi.longitude)
                    / (vj.latitude - vi.latitude);
            if lng < crossing_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Orientation of the ordered triplet (p, q, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of (p, q, r) with longitude as x and latitude as y.
pub fn orientation(p: &Coordinate, q: &Coordinate, r: &Coordinate) -> Orientation {
    let val = (q.latitude - p.latitude) * (r.longitude - q.longitude)
        - (q.longitude - p.longitude) * (r.latitude - q.latitude);
    if val.abs() < EPSILON {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True when `q` lies on segment `pr`, given that p, q, r are collinear.
pub fn on_segment(p: &Coordinate, q: &Coordinate, r: &Coordinate) -> bool {
    q.longitude <= p.longitude.max(r.longitude) + EPSILON
        && q.longitude >= p.longitude.min(r.longitude) - EPSILON
        && q.latitude <= p.latitude.max(r.latitude) + EPSILON
        && q.latitude >= p.latitude.min(r.latitude) - EPSILON
}

/// True when segments `p1q1` and `p2q2` share at least one point.
pub fn segments_intersect(
    p1: &Coordinate,
    q1: &Coordinate,
    p2: &Coordinate,
    q2: &Coordinate,
) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Intersection point of segments `p1q1` and `p2q2`.
///
/// Returns `None` when the segments do not meet or are parallel
/// (collinear overlaps have no single intersection point).
pub fn find_intersection(
    p1: &Coordinate,
    q1: &Coordinate,
    p2: &Coordinate,
    q2: &Coordinate,
) -> Option<Coordinate> {
    let (x1, y1) = (p1.longitude, p1.latitude);
    let (x2, y2) = (q1.longitude, q1.latitude);
    let (x3, y3) = (p2.longitude, p2.latitude);
    let (x4, y4) = (q2.longitude, q2.latitude);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < EPSILON * EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (-EPSILON..=1.0 + EPSILON).contains(&t) && (-EPSILON..=1.0 + EPSILON).contains(&u) {
        Some(Coordinate::new(y1 + t * (y2 - y1), x1 + t * (x2 - x1)))
    } else {
        None
    }
}

/// Initial great-circle bearing from point 1 to point 2, in [0, 360).
pub fn initial_bearing(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let x = delta_lng.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lng.cos();

    Waypoint::normalize_heading(x.atan2(y).to_degrees())
}

/// Destination reached from (lat, lng) after `distance` meters on `bearing`.
///
/// Spherical direct formula; longitude is normalized to [-180, 180].
pub fn destination_point(lat: f64, lng: f64, bearing: f64, distance: f64) -> Coordinate {
    let angular = distance / EARTH_RADIUS_M;
    let theta = bearing.to_radians();
    let lat1 = lat.to_radians();
    let lng1 = lng.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lng2 = lng1
        + (theta.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), normalize_longitude(lng2.to_degrees()))
}

/// Wraps a longitude into [-180, 180].
pub fn normalize_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Linear interpolation between two coordinates, `t` in [0, 1].
pub fn interpolate(a: &Coordinate, b: &Coordinate, t: f64) -> Coordinate {
    Coordinate::new(
        a.latitude + (b.latitude - a.latitude) * t,
        a.longitude + (b.longitude - a.longitude) * t,
    )
}
