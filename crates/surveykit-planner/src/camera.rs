//! Camera footprint derivation.
//!
//! When a request carries complete camera geometry, the scan line spacing
//! and the photo cadence are derived from the ground footprint of a single
//! image instead of the caller-supplied values.

use crate::error::{ParameterError, ParameterResult};
use surveykit_core::{CameraParameters, GenerationParameters};

/// Photo interval used when the caller leaves it unset, in seconds.
pub const DEFAULT_PHOTO_INTERVAL_S: f64 = 2.0;

/// Bounds applied to a derived (non-manual) speed, in m/s.
pub const MIN_DERIVED_SPEED: f64 = 1.0;
pub const MAX_DERIVED_SPEED: f64 = 15.0;

/// Ground coverage of one image at a given altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Meters covered perpendicular to the flight line
    pub across_track: f64,
    /// Meters covered along the flight line
    pub along_track: f64,
}

impl Footprint {
    pub fn new(camera: &CameraParameters, altitude: f64) -> Self {
        Self {
            across_track: altitude * camera.sensor_width / camera.focal_length,
            along_track: altitude * camera.sensor_height / camera.focal_length,
        }
    }
}

/// Flight parameters after camera derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveParameters {
    pub line_spacing: f64,
    pub photo_interval: f64,
    pub speed: f64,
    /// Distance between consecutive photos, when derived from a camera
    pub photo_distance: Option<f64>,
}

impl EffectiveParameters {
    /// Derive effective spacing, interval and speed.
    ///
    /// Without complete camera parameters the caller values pass through.
    pub fn resolve(params: &GenerationParameters) -> ParameterResult<Self> {
        let Some(camera) = params.active_camera() else {
            return Ok(Self {
                line_spacing: params.line_spacing,
                photo_interval: params.photo_interval,
                speed: params.speed,
                photo_distance: None,
            });
        };

        if !(0.0..100.0).contains(&camera.overlap_percent) {
            return Err(ParameterError::OutOfRange {
                name: "overlap_percent".to_string(),
                value: camera.overlap_percent,
                min: 0.0,
                max: 100.0,
            });
        }
        if !(params.altitude.is_finite() && params.altitude > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "altitude".to_string(),
                reason: "camera footprint needs a positive altitude".to_string(),
            });
        }

        let footprint = Footprint::new(camera, params.altitude);
        let keep = 1.0 - camera.overlap_percent / 100.0;
        let line_spacing = footprint.across_track * keep;
        let photo_distance = footprint.along_track * keep;

        let (speed, photo_interval) = if camera.manual_speed_set && params.speed > 0.0 {
            (params.speed, photo_distance / params.speed)
        } else {
            let interval = if params.photo_interval > 0.0 {
                params.photo_interval
            } else {
                DEFAULT_PHOTO_INTERVAL_S
            };
            let speed = (photo_distance / interval).clamp(MIN_DERIVED_SPEED, MAX_DERIVED_SPEED);
            (speed, interval)
        };

        Ok(Self {
            line_spacing,
            photo_interval,
            speed,
            photo_distance: Some(photo_distance),
        })
    }

    /// Distance flown between photos, if computable.
    pub fn distance_per_photo(&self) -> Option<f64> {
        let d = self
            .photo_distance
            .unwrap_or(self.speed * self.photo_interval);
        (d.is_finite() && d > 0.0).then_some(d)
    }
}
