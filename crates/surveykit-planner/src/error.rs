//! Error types for the planner crate.
//!
//! This module provides structured error types for waypoint generation
//! and parameter validation.

use surveykit_core::ShapeKind;
use thiserror::Error;

/// Errors that can occur while generating waypoints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The shape does not carry enough coordinates.
    #[error("{kind} needs at least {required} coordinates, got {found}")]
    InsufficientCoordinates {
        kind: ShapeKind,
        required: usize,
        found: usize,
    },

    /// A coordinate is outside the WGS-84 ranges or not finite.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Input is well-formed but almost certainly wrong upstream.
    #[error("Ambiguous input: {0}")]
    AmbiguousInput(String),

    /// Geometry could not be clipped consistently.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Generation would exceed the configured waypoint budget.
    #[error("Waypoint limit of {limit} exceeded")]
    WaypointLimitExceeded { limit: usize },

    /// The shape kind tag could not be recognised.
    #[error("Unknown shape kind: {0}")]
    UnknownShapeKind(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A core data model error occurred.
    #[error(transparent)]
    Core(#[from] surveykit_core::Error),
}

impl PlanError {
    /// Errors that reject the caller's input outright.
    ///
    /// These are never retried with the legacy generator.
    pub fn is_input_rejection(&self) -> bool {
        match self {
            PlanError::AmbiguousInput(_) | PlanError::InvalidCoordinate(_) => true,
            PlanError::Core(e) => e.is_coordinate_error(),
            _ => false,
        }
    }
}

/// Errors related to generation parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for planner operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
