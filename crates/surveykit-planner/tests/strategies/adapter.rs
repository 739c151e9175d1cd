use surveykit_core::Coordinate;
use surveykit_planner::{CompatibilityAdapter, LegacyRequest, PlanError, WaypointGenerator};
use surveykit_settings::PlannerConfig;

fn request(bounds_type: &str, bounds: Vec<Coordinate>) -> LegacyRequest {
    LegacyRequest {
        altitude: 60.0,
        speed: 5.0,
        line_spacing: 30.0,
        photo_interval: 2.0,
        use_endpoints_only: true,
        starting_index: 4,
        ..LegacyRequest::new(bounds_type, bounds)
    }
}

#[test]
fn test_primary_path_for_rectangle() {
    let adapter = CompatibilityAdapter::default();
    let wps = adapter
        .generate_legacy(&request(
            "rectangle",
            vec![Coordinate::new(60.0, 24.0), Coordinate::new(60.001, 24.002)],
        ))
        .unwrap();
    assert!(!wps.is_empty());
    assert_eq!(wps[0].index, 4);
    assert_eq!(wps[0].altitude, 60.0);
}

#[test]
fn test_empty_polygon_falls_back_to_zigzag() {
    // Two bounds are not a polygon, but they still span a box.
    let adapter = CompatibilityAdapter::default();
    let wps = adapter
        .generate_legacy(&request(
            "polygon",
            vec![Coordinate::new(60.0, 24.0), Coordinate::new(60.001, 24.002)],
        ))
        .unwrap();
    assert!(!wps.is_empty());
    assert_eq!(wps[0].index, 4);
    assert_eq!((wps[0].latitude, wps[0].longitude), (60.0, 24.0));
}

#[test]
fn test_unknown_bounds_type_falls_back() {
    let adapter = CompatibilityAdapter::default();
    let wps = adapter
        .generate_legacy(&request(
            "hexagon",
            vec![Coordinate::new(60.0, 24.0), Coordinate::new(60.001, 24.002)],
        ))
        .unwrap();
    assert!(!wps.is_empty());
}

#[test]
fn test_origin_circle_not_retried() {
    let adapter = CompatibilityAdapter::default();
    let err = adapter
        .generate_legacy(&request("circle", vec![Coordinate::new(0.0, 0.0)]))
        .unwrap_err();
    assert!(matches!(err, PlanError::AmbiguousInput(_)));
}

#[test]
fn test_fallback_failure_propagates() {
    let adapter = CompatibilityAdapter::default();
    let err = adapter
        .generate_legacy(&request("polygon", vec![Coordinate::new(60.0, 24.0)]))
        .unwrap_err();
    assert!(matches!(err, PlanError::InsufficientCoordinates { found: 1, .. }));
}

#[test]
fn test_disabled_fallback_returns_empty() {
    let mut config = PlannerConfig::default();
    config.fallback.enabled = false;
    let adapter = CompatibilityAdapter::from_config(&config);
    let wps = adapter
        .generate_legacy(&request(
            "polygon",
            vec![Coordinate::new(60.0, 24.0), Coordinate::new(60.001, 24.002)],
        ))
        .unwrap();
    assert!(wps.is_empty());
}

#[test]
fn test_legacy_circle_uses_default_radius() {
    let adapter = CompatibilityAdapter::default();
    let wps = adapter
        .generate_legacy(&request("circle", vec![Coordinate::new(60.0, 24.0)]))
        .unwrap();
    let d = surveykit_planner::geometry::haversine_distance(
        60.0,
        24.0,
        wps[0].latitude,
        wps[0].longitude,
    );
    assert!((d - 100.0).abs() < 1.0);
}
