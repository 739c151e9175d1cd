use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor, ShapeKind};
use surveykit_planner::{PlanError, PlanRequest, WaypointOrchestrator};
use surveykit_settings::PlannerConfig;

fn field() -> ShapeDescriptor {
    ShapeDescriptor::rectangle(
        "field",
        Coordinate::new(60.0, 24.0),
        Coordinate::new(60.002, 24.004),
    )
}

fn path() -> ShapeDescriptor {
    ShapeDescriptor::polyline(
        "path",
        vec![Coordinate::new(61.0, 25.0), Coordinate::new(61.001, 25.002)],
    )
}

#[test]
fn test_rectangle_then_polyline_continue_indices() {
    let orchestrator = WaypointOrchestrator::new();
    let params = GenerationParameters {
        starting_index: 1,
        ..GenerationParameters::default()
    };

    let wps = orchestrator.generate(&[field(), path()], &params);
    let split = wps
        .iter()
        .position(|w| w.latitude >= 61.0)
        .expect("polyline waypoints present");
    assert!(split > 0);
    assert!(wps[..split].iter().all(|w| w.latitude <= 60.002 && w.longitude <= 24.004));
    assert!(wps[split..].iter().all(|w| w.latitude >= 61.0 && w.longitude >= 25.0));
    assert_eq!(wps[split].index, wps[split - 1].index + 1);
    for (i, wp) in wps.iter().enumerate() {
        assert_eq!(wp.index, 1 + i as u32);
    }
}

#[test]
fn test_parameters_only_differ_by_index() {
    let orchestrator = WaypointOrchestrator::new();
    let params = GenerationParameters {
        altitude: 80.0,
        action: "survey".to_string(),
        ..GenerationParameters::default()
    };
    let wps = orchestrator.generate(&[field(), path()], &params);
    assert!(wps.iter().all(|w| w.altitude == 80.0 && w.action == "survey"));
}

#[test]
fn test_degenerate_shape_contributes_nothing() {
    let orchestrator = WaypointOrchestrator::new();
    let lonely =
        ShapeDescriptor::new("lonely", ShapeKind::Polygon, vec![Coordinate::new(1.0, 1.0)]);
    let report = orchestrator.generate_report(&[lonely, path()], &GenerationParameters::default());
    assert!(report.is_complete());
    assert_eq!(report.waypoints[0].index, 0);
}

#[test]
fn test_request_with_unknown_kind() {
    let json = r#"{
        "shapes": [
            {"id": "mystery", "shapeKind": "hexagon", "boundary": []},
            {"id": "path", "shapeKind": "polyline",
             "boundary": [{"latitude": 61.0, "longitude": 25.0}]}
        ],
        "params": {"altitude": 50, "speed": 5, "lineSpacing": 20}
    }"#;
    let request: PlanRequest = serde_json::from_str(json).unwrap();
    let report = WaypointOrchestrator::new().generate_request(&request);
    assert_eq!(report.waypoints.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].error, PlanError::UnknownShapeKind("hexagon".to_string()));
}

#[test]
fn test_config_limit_applies() {
    let mut config = PlannerConfig::default();
    config.limits.max_waypoints = 5;
    let orchestrator = WaypointOrchestrator::from_config(&config);
    let report = orchestrator.generate_report(&[field()], &GenerationParameters::default());
    assert!(report.waypoints.is_empty());
    assert!(matches!(
        report.failures[0].error,
        PlanError::WaypointLimitExceeded { limit: 5 }
    ));
}

#[test]
fn test_identical_inputs_identical_output() {
    let orchestrator = WaypointOrchestrator::new();
    let params = GenerationParameters::default();
    let circle = ShapeDescriptor::circle("c", Coordinate::new(60.5, 24.5), 250.0);
    let first = orchestrator.generate(&[field(), circle.clone(), path()], &params);
    let second = orchestrator.generate(&[field(), circle, path()], &params);
    assert_eq!(first, second);
}
