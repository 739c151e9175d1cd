use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor};
use surveykit_planner::{RectangleStrategy, ShapeStrategy};

fn east_west(spacing: f64) -> GenerationParameters {
    GenerationParameters {
        line_spacing: spacing,
        is_north_south: false,
        ..GenerationParameters::default()
    }
}

#[test]
fn test_one_degree_rectangle_starts_at_south_west_corner() {
    let shape = ShapeDescriptor::rectangle(
        "field",
        Coordinate::new(60.0, 24.0),
        Coordinate::new(61.0, 25.0),
    );
    let params = GenerationParameters {
        speed: 15.0,
        photo_interval: 100.0,
        use_endpoints_only: false,
        ..east_west(100.0)
    };

    let wps = RectangleStrategy::default().generate(&shape, &params).unwrap();
    assert!(!wps.is_empty());
    assert!((wps[0].latitude - 60.0).abs() < 1e-9);
    assert!((wps[0].longitude - 24.0).abs() < 1e-9);
    assert!(wps.iter().all(|w| (60.0..=61.0).contains(&w.latitude)));
    assert!(wps.iter().all(|w| (24.0..=25.0).contains(&w.longitude)));
}

#[test]
fn test_zero_height_rectangle_spans_corners() {
    let shape = ShapeDescriptor::rectangle(
        "strip",
        Coordinate::new(60.0, 24.0),
        Coordinate::new(60.0, 24.05),
    );
    let params = GenerationParameters {
        use_endpoints_only: true,
        ..east_west(50.0)
    };

    let wps = RectangleStrategy::default().generate(&shape, &params).unwrap();
    assert_eq!(wps.len(), 2);
    let (first, last) = (&wps[0], &wps[wps.len() - 1]);
    assert_eq!((first.latitude, first.longitude), (60.0, 24.0));
    assert_eq!((last.latitude, last.longitude), (60.0, 24.05));
}

#[test]
fn test_corner_order_does_not_matter() {
    let a = Coordinate::new(60.0, 24.0);
    let b = Coordinate::new(60.005, 24.01);
    let params = east_west(80.0);

    let forward = RectangleStrategy::default()
        .generate(&ShapeDescriptor::rectangle("r", a, b), &params)
        .unwrap();
    let backward = RectangleStrategy::default()
        .generate(&ShapeDescriptor::rectangle("r", b, a), &params)
        .unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_extra_coordinates_ignored() {
    let corners = vec![
        Coordinate::new(60.0, 24.0),
        Coordinate::new(60.005, 24.01),
        Coordinate::new(70.0, 30.0),
    ];
    let shape = ShapeDescriptor::new("r", surveykit_core::ShapeKind::Rectangle, corners);
    let wps = RectangleStrategy::default().generate(&shape, &east_west(80.0)).unwrap();
    assert!(wps.iter().all(|w| w.latitude <= 60.005));
}

#[test]
fn test_invalid_corner_rejected() {
    let shape =
        ShapeDescriptor::rectangle("r", Coordinate::new(95.0, 24.0), Coordinate::new(60.0, 24.0));
    let err = RectangleStrategy::default().generate(&shape, &east_west(80.0)).unwrap_err();
    assert!(err.is_input_rejection());
}
