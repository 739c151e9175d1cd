//! # SurveyKit Planner
//!
//! Waypoint generation engine for drone survey missions. Given user-drawn
//! areas or paths and flight parameters, it produces ordered geographic
//! waypoints that cover the area (or follow the path) for aerial
//! photography.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Geometry kernel**: haversine distance, degree/meter conversion,
//!   point-in-polygon, segment intersection, bearings and destination points
//! - **Camera footprint**: line spacing and photo cadence derived from
//!   sensor geometry and overlap
//!
//! ### Strategies
//! - **Rectangle**: boustrophedon rows or columns between two corners
//! - **Circle**: inward-facing orbit at a fixed radius
//! - **Polygon**: raster sampling clipped to an arbitrary simple polygon
//! - **Polyline**: path following, or area coverage for closed rings
//!
//! ### Composition
//! - **Orchestrator**: plans heterogeneous shape batches with one
//!   continuous index sequence and a shared waypoint budget
//! - **Fallback**: decorator that retries with the legacy zig-zag generator
//!   on empty or failed results
//! - **Summary**: distance, duration and photo statistics for a plan
//!
//! ## Architecture
//!
//! ```text
//! CompatibilityAdapter (FallbackGenerator)
//!   ├── WaypointOrchestrator
//!   │     └── ShapeStrategy (rectangle, circle, polygon, polyline)
//!   │           ├── WaypointBuilder (indices, budget, WGS-84 checks)
//!   │           └── geometry
//!   └── LegacyGenerator (bounding-box zig-zag)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor};
//! use surveykit_planner::WaypointOrchestrator;
//!
//! let orchestrator = WaypointOrchestrator::new();
//! let shapes = vec![ShapeDescriptor::rectangle(
//!     "field",
//!     Coordinate::new(60.0, 24.0),
//!     Coordinate::new(60.002, 24.004),
//! )];
//! let waypoints = orchestrator.generate(&shapes, &GenerationParameters::default());
//! assert!(!waypoints.is_empty());
//! ```

pub mod builder;
pub mod camera;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod legacy;
pub mod orchestrator;
pub mod request;
pub mod strategies;
pub mod summary;

pub use builder::WaypointBuilder;
pub use camera::{EffectiveParameters, Footprint};
pub use error::{ParameterError, ParameterResult, PlanError, PlanResult};
pub use fallback::{CompatibilityAdapter, FallbackGenerator, WaypointGenerator};
pub use legacy::LegacyGenerator;
pub use orchestrator::{GenerationReport, ShapeFailure, WaypointOrchestrator};
pub use request::{LegacyRequest, PlanRequest, ShapeInput};
pub use strategies::{
    CircleStrategy, PolygonStrategy, PolylineStrategy, RectangleStrategy, ShapeStrategy,
};
pub use summary::MissionSummary;
