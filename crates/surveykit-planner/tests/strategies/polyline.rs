use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor};
use surveykit_planner::geometry::is_point_in_polygon;
use surveykit_planner::{PlanError, PolylineStrategy, ShapeStrategy};

fn endpoints_only(start: u32) -> GenerationParameters {
    GenerationParameters {
        use_endpoints_only: true,
        starting_index: start,
        ..GenerationParameters::default()
    }
}

#[test]
fn test_open_path_follows_vertices() {
    let vertices = vec![
        Coordinate::new(60.0, 24.0),
        Coordinate::new(60.5, 24.5),
        Coordinate::new(61.0, 25.0),
    ];
    let shape = ShapeDescriptor::polyline("path", vertices.clone());

    let wps = PolylineStrategy::default().generate(&shape, &endpoints_only(7)).unwrap();
    assert_eq!(wps.len(), 3);
    for (i, (wp, vertex)) in wps.iter().zip(&vertices).enumerate() {
        assert_eq!(wp.index, 7 + i as u32);
        assert_eq!(wp.latitude, vertex.latitude);
        assert_eq!(wp.longitude, vertex.longitude);
    }
}

#[test]
fn test_single_point() {
    let shape = ShapeDescriptor::polyline("p", vec![Coordinate::new(60.0, 24.0)]);
    let params = GenerationParameters {
        altitude: 75.0,
        ..GenerationParameters::default()
    };
    let wps = PolylineStrategy::default().generate(&shape, &params).unwrap();
    assert_eq!(wps.len(), 1);
    assert_eq!(wps[0].altitude, 75.0);
}

#[test]
fn test_empty_polyline() {
    let shape = ShapeDescriptor::polyline("p", Vec::new());
    let wps = PolylineStrategy::default()
        .generate(&shape, &GenerationParameters::default())
        .unwrap();
    assert!(wps.is_empty());
}

#[test]
fn test_closed_ring_covers_interior() {
    // Triangle ring, closed by repeating the first vertex.
    let ring = vec![
        Coordinate::new(50.0, 8.0),
        Coordinate::new(50.0, 8.02),
        Coordinate::new(50.01, 8.01),
        Coordinate::new(50.0, 8.0),
    ];
    let shape = ShapeDescriptor::polyline("ring", ring);
    assert!(shape.is_closed_polyline());

    for north_south in [false, true] {
        let params = GenerationParameters {
            line_spacing: 50.0,
            is_north_south: north_south,
            ..GenerationParameters::default()
        };
        let wps = PolylineStrategy::default().generate(&shape, &params).unwrap();
        assert!(!wps.is_empty());
        for wp in &wps {
            assert!(
                is_point_in_polygon(&shape.boundary, wp.latitude, wp.longitude),
                "waypoint {} outside ring",
                wp.index
            );
        }
    }
}

#[test]
fn test_closed_ring_splits_concave_rows() {
    // U-shaped ring: rows through the arms cross four edges.
    let ring = vec![
        Coordinate::new(50.0, 8.0),
        Coordinate::new(50.0, 8.03),
        Coordinate::new(50.01, 8.03),
        Coordinate::new(50.01, 8.02),
        Coordinate::new(50.003, 8.02),
        Coordinate::new(50.003, 8.01),
        Coordinate::new(50.01, 8.01),
        Coordinate::new(50.01, 8.0),
        Coordinate::new(50.0, 8.0),
    ];
    let shape = ShapeDescriptor::polyline("u", ring);
    let params = GenerationParameters {
        line_spacing: 100.0,
        ..endpoints_only(0)
    };

    let wps = PolylineStrategy::default().generate(&shape, &params).unwrap();
    let gap = wps
        .iter()
        .filter(|w| w.latitude > 50.003 && w.longitude > 8.01 && w.longitude < 8.02);
    assert_eq!(gap.count(), 0);
    assert!(wps.iter().any(|w| w.latitude > 50.003));
}

#[test]
fn test_invalid_vertex_rejected() {
    let shape = ShapeDescriptor::polyline(
        "p",
        vec![Coordinate::new(60.0, 24.0), Coordinate::new(60.0, 190.0)],
    );
    let err = PolylineStrategy::default()
        .generate(&shape, &GenerationParameters::default())
        .unwrap_err();
    assert!(matches!(err, PlanError::Core(_)));
}
