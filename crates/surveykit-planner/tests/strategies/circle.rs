use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor};
use surveykit_planner::geometry::haversine_distance;
use surveykit_planner::{CircleStrategy, ShapeStrategy};

#[test]
fn test_kilometre_orbit() {
    let shape = ShapeDescriptor::circle("orbit", Coordinate::new(60.0, 24.0), 1000.0);
    let params = GenerationParameters {
        speed: 10.0,
        photo_interval: 3.0,
        ..GenerationParameters::default()
    };

    let wps = CircleStrategy.generate(&shape, &params).unwrap();
    // floor(2π·1000 / 30) = 209
    assert_eq!(wps.len(), 209);
    for wp in &wps {
        let d = haversine_distance(60.0, 24.0, wp.latitude, wp.longitude);
        assert!((d - 1000.0).abs() < 1.0, "waypoint {} at {d} m", wp.index);
    }
}

#[test]
fn test_small_circle_keeps_minimum_count() {
    let shape = ShapeDescriptor::circle("tiny", Coordinate::new(45.0, 7.0), 5.0);
    let wps = CircleStrategy.generate(&shape, &GenerationParameters::default()).unwrap();
    assert_eq!(wps.len(), 24);
}

#[test]
fn test_radius_from_centre_coordinate() {
    let shape = ShapeDescriptor::new(
        "c",
        surveykit_core::ShapeKind::Circle,
        vec![Coordinate::with_radius(45.0, 7.0, 300.0)],
    );
    let wps = CircleStrategy.generate(&shape, &GenerationParameters::default()).unwrap();
    let d = haversine_distance(45.0, 7.0, wps[0].latitude, wps[0].longitude);
    assert!((d - 300.0).abs() < 1.0);
}

#[test]
fn test_headings_point_inward() {
    let shape = ShapeDescriptor::circle("c", Coordinate::new(45.0, 7.0), 5.0);
    let wps = CircleStrategy.generate(&shape, &GenerationParameters::default()).unwrap();
    assert_eq!(wps.len(), 24);
    let quarter = wps.len() / 4;
    // Due east of the centre the camera looks west.
    assert!((wps[quarter].heading - 270.0).abs() < 1e-6);
    assert!(wps.iter().all(|w| (0.0..360.0).contains(&w.heading)));
}
