//! # SurveyKit Core
//!
//! Core types and utilities for SurveyKit.
//! Provides the data model shared by the planner and its callers:
//! coordinates, shape descriptors, generation parameters and waypoints,
//! plus the measurement-system helpers used by display layers.

pub mod data;
pub mod error;
pub mod units;

pub use data::{
    BoundingBox, CameraParameters, Coordinate, GenerationParameters, ShapeDescriptor, ShapeKind,
    Waypoint,
};

pub use error::{Error, Result};

pub use units::MeasurementSystem;
