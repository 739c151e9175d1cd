//! Unit conversion utilities
//!
//! Handles conversion between Metric (meters) and Imperial (feet) systems
//! for display. Generation always works in meters; the measurement system
//! only changes how distances and speeds are rendered.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters in one international foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per second in one mile per hour.
pub const MPS_PER_MPH: f64 = 0.44704;

/// Measurement system
///
/// Serialized as `"metric"` / `"imperial"`; deserializes from those names or
/// from the numeric `unitType` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (m, m/s)
    #[default]
    Metric,
    /// Imperial system (ft, mph)
    Imperial,
}

impl MeasurementSystem {
    /// Map the numeric `unitType` tag used by older callers.
    ///
    /// `1` is imperial; anything else is metric.
    pub fn from_unit_type(unit_type: i32) -> Self {
        match unit_type {
            1 => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// Numeric `unitType` tag for this system.
    pub fn unit_type(self) -> i32 {
        match self {
            Self::Metric => 0,
            Self::Imperial => 1,
        }
    }
}

impl<'de> Deserialize<'de> for MeasurementSystem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Tag(i32),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Tag(tag) => Ok(Self::from_unit_type(tag)),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "m" | "0" => Ok(Self::Metric),
            "imperial" | "ft" | "1" => Ok(Self::Imperial),
            _ => Err(Error::UnknownMeasurementSystem(s.to_string())),
        }
    }
}

/// Format a distance given in meters for display
///
/// * `meters` - Distance in meters
/// * `system` - Target measurement system
pub fn format_distance(meters: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => {
            if meters.abs() >= 1000.0 {
                format!("{:.2} km", meters / 1000.0)
            } else {
                format!("{:.1} m", meters)
            }
        }
        MeasurementSystem::Imperial => {
            let feet = meters / METERS_PER_FOOT;
            if feet.abs() >= 5280.0 {
                format!("{:.2} mi", feet / 5280.0)
            } else {
                format!("{:.1} ft", feet)
            }
        }
    }
}

/// Format an altitude given in meters for display
///
/// Altitudes never switch to km/mi.
pub fn format_altitude(meters: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} m", meters),
        MeasurementSystem::Imperial => format!("{:.1} ft", meters / METERS_PER_FOOT),
    }
}

/// Format a speed given in m/s for display
pub fn format_speed(meters_per_second: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1} m/s", meters_per_second),
        MeasurementSystem::Imperial => format!("{:.1} mph", meters_per_second / MPS_PER_MPH),
    }
}

/// Get the short distance label for the given system ("m" or "ft")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "m",
        MeasurementSystem::Imperial => "ft",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_type_mapping() {
        assert_eq!(MeasurementSystem::from_unit_type(0), MeasurementSystem::Metric);
        assert_eq!(MeasurementSystem::from_unit_type(1), MeasurementSystem::Imperial);
        assert_eq!(MeasurementSystem::from_unit_type(7), MeasurementSystem::Metric);
        assert_eq!(MeasurementSystem::Imperial.unit_type(), 1);
    }

    #[test]
    fn test_metric_formatting() {
        assert_eq!(format_distance(250.0, MeasurementSystem::Metric), "250.0 m");
        assert_eq!(format_distance(1500.0, MeasurementSystem::Metric), "1.50 km");
        assert_eq!(format_speed(10.0, MeasurementSystem::Metric), "10.0 m/s");
    }

    #[test]
    fn test_imperial_formatting() {
        assert_eq!(format_altitude(30.48, MeasurementSystem::Imperial), "100.0 ft");
        assert_eq!(format_distance(3218.688, MeasurementSystem::Imperial), "2.00 mi");
        assert_eq!(format_speed(4.4704, MeasurementSystem::Imperial), "10.0 mph");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Imperial".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Imperial
        );
        assert_eq!(" metric ".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Metric);
        assert!("furlongs".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_deserialize_tag_or_name() {
        let tag: MeasurementSystem = serde_json::from_str("1").unwrap();
        assert_eq!(tag, MeasurementSystem::Imperial);
        let tag: MeasurementSystem = serde_json::from_str("0").unwrap();
        assert_eq!(tag, MeasurementSystem::Metric);
        let name: MeasurementSystem = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(name, MeasurementSystem::Imperial);
        assert!(serde_json::from_str::<MeasurementSystem>("\"cubits\"").is_err());
        assert_eq!(serde_json::to_string(&MeasurementSystem::Imperial).unwrap(), "\"imperial\"");
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(get_unit_label(MeasurementSystem::Metric), "m");
        assert_eq!(get_unit_label(MeasurementSystem::Imperial), "ft");
    }
}
