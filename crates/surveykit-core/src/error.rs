//! Error handling for SurveyKit core types
//!
//! Covers the failures that can happen while building or parsing the
//! shared data model:
//! - Coordinates outside the WGS-84 ranges
//! - Unknown shape kind or unit type tags
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SurveyKit core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Coordinate is not a finite WGS-84 latitude/longitude pair
    #[error("Invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        /// The offending latitude in degrees.
        latitude: f64,
        /// The offending longitude in degrees.
        longitude: f64,
        /// Why the coordinate was rejected.
        reason: String,
    },

    /// Shape kind tag could not be recognised
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// Measurement system tag could not be recognised
    #[error("Unknown measurement system: {0}")]
    UnknownMeasurementSystem(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error rejects a coordinate
    pub fn is_coordinate_error(&self) -> bool {
        matches!(self, Error::InvalidCoordinate { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
