//! Flight statistics for a generated waypoint list.

use crate::geometry::distance_between;
use serde::Serialize;
use std::fmt::Write;
use surveykit_core::units::{format_altitude, format_distance, format_speed};
use surveykit_core::{BoundingBox, Coordinate, MeasurementSystem, Waypoint};
use surveykit_settings::DefaultSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionSummary {
    pub waypoint_count: usize,
    pub photo_count: usize,
    /// Sum of great-circle legs (m)
    pub total_distance: f64,
    /// Sum of leg length over leg speed (s)
    pub estimated_duration: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub bounds: Option<BoundingBox>,
}

impl MissionSummary {
    /// Counts photos by the default photo action.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        Self::from_waypoints_with_action(waypoints, &DefaultSettings::default().photo_action)
    }

    pub fn from_waypoints_with_action(waypoints: &[Waypoint], photo_action: &str) -> Self {
        let positions: Vec<Coordinate> = waypoints
            .iter()
            .map(|w| Coordinate::new(w.latitude, w.longitude))
            .collect();

        let mut total_distance = 0.0;
        let mut estimated_duration = 0.0;
        for (leg, to) in positions.windows(2).zip(waypoints.iter().skip(1)) {
            let length = distance_between(&leg[0], &leg[1]);
            total_distance += length;
            if to.speed > 0.0 {
                estimated_duration += length / to.speed;
            }
        }

        let (min_altitude, max_altitude) = if waypoints.is_empty() {
            (0.0, 0.0)
        } else {
            waypoints.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| {
                (lo.min(w.altitude), hi.max(w.altitude))
            })
        };

        Self {
            waypoint_count: waypoints.len(),
            photo_count: waypoints.iter().filter(|w| w.action == photo_action).count(),
            total_distance,
            estimated_duration,
            min_altitude,
            max_altitude,
            bounds: BoundingBox::from_coordinates(&positions),
        }
    }

    /// Human-readable report in the given measurement system.
    pub fn format(&self, system: MeasurementSystem) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Waypoints:  {}", self.waypoint_count);
        let _ = writeln!(out, "Photos:     {}", self.photo_count);
        let _ = writeln!(out, "Distance:   {}", format_distance(self.total_distance, system));
        let _ = writeln!(out, "Duration:   {}", format_duration(self.estimated_duration));
        let _ = writeln!(
            out,
            "Altitude:   {} - {}",
            format_altitude(self.min_altitude, system),
            format_altitude(self.max_altitude, system)
        );
        if self.estimated_duration > 0.0 {
            let _ = writeln!(
                out,
                "Avg speed:  {}",
                format_speed(self.total_distance / self.estimated_duration, system)
            );
        }
        if let Some(b) = &self.bounds {
            let _ = writeln!(
                out,
                "Bounds:     ({:.6}, {:.6}) - ({:.6}, {:.6})",
                b.min_lat, b.min_lng, b.max_lat, b.max_lng
            );
        }
        out
    }
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else {
        format!("{m}m {s:02}s")
    }
}
