//! Waypoints emitted by the generation strategies.

use serde::{Deserialize, Serialize};

/// One point of a flight plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    /// Unique, caller-visible ordering key
    pub index: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude (m)
    pub altitude: f64,
    /// Speed (m/s)
    pub speed: f64,
    /// Compass heading in degrees, 0 = north, clockwise, in [0, 360)
    pub heading: f64,
    pub action: String,
}

impl Waypoint {
    /// Normalizes any angle in degrees into [0, 360).
    pub fn normalize_heading(degrees: f64) -> f64 {
        let h = degrees.rem_euclid(360.0);
        if h >= 360.0 {
            0.0
        } else {
            h
        }
    }
}
