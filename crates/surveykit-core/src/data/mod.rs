//! Data models for survey planning
//!
//! This module provides:
//! - WGS-84 coordinates and bounding boxes
//! - Shape descriptors for rectangles, circles, polygons and polylines
//! - Generation parameters, including optional camera geometry
//! - Waypoints, the output of every generation strategy

pub mod coordinate;
pub mod params;
pub mod shape;
pub mod waypoint;

pub use coordinate::{BoundingBox, Coordinate};
pub use params::{CameraParameters, GenerationParameters};
pub use shape::{ShapeDescriptor, ShapeKind};
pub use waypoint::Waypoint;
