//! Generation parameters shared by every shape in a request.

use crate::units::MeasurementSystem;
use serde::{Deserialize, Serialize};

/// Camera geometry used to derive line spacing and photo interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraParameters {
    /// Lens focal length (mm)
    pub focal_length: f64,
    /// Sensor width, across track (mm)
    pub sensor_width: f64,
    /// Sensor height, along track (mm)
    pub sensor_height: f64,
    /// Desired front and side overlap (percent)
    pub overlap_percent: f64,
    /// When true the caller's speed is kept and the photo interval adapts
    #[serde(default)]
    pub manual_speed_set: bool,
}

impl CameraParameters {
    /// Camera parameters only take effect when every dimension is positive.
    pub fn is_complete(&self) -> bool {
        self.focal_length > 0.0
            && self.sensor_width > 0.0
            && self.sensor_height > 0.0
            && self.overlap_percent > 0.0
    }
}

/// Parameters applied uniformly to every shape of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    /// Flight altitude (m)
    pub altitude: f64,
    /// Flight speed (m/s)
    pub speed: f64,
    /// Distance between adjacent scan lines (m)
    pub line_spacing: f64,
    /// Index assigned to the first generated waypoint
    #[serde(default)]
    pub starting_index: u32,
    /// Action tag attached to waypoints; opaque to the planner
    #[serde(default)]
    pub action: String,
    /// Seconds between photos, or a waypoint stride for polygons
    #[serde(default)]
    pub photo_interval: f64,
    #[serde(default)]
    pub use_endpoints_only: bool,
    #[serde(default)]
    pub is_north_south: bool,
    #[serde(default)]
    pub unit_type: MeasurementSystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraParameters>,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            altitude: 50.0,
            speed: 5.0,
            line_spacing: 20.0,
            starting_index: 0,
            action: String::new(),
            photo_interval: 2.0,
            use_endpoints_only: false,
            is_north_south: false,
            unit_type: MeasurementSystem::Metric,
            camera: None,
        }
    }
}

impl GenerationParameters {
    /// Create parameters with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of these parameters starting at another index.
    pub fn with_starting_index(&self, starting_index: u32) -> Self {
        Self {
            starting_index,
            ..self.clone()
        }
    }

    /// Camera parameters that are complete enough to use.
    pub fn active_camera(&self) -> Option<&CameraParameters> {
        self.camera.as_ref().filter(|c| c.is_complete())
    }
}
