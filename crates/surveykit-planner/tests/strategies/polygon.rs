use surveykit_core::{CameraParameters, Coordinate, GenerationParameters, ShapeDescriptor};
use surveykit_planner::geometry::is_point_in_polygon;
use surveykit_planner::{PolygonStrategy, ShapeStrategy};

/// L-shaped field, notch in the north-east quarter.
fn l_shape() -> ShapeDescriptor {
    ShapeDescriptor::polygon(
        "l",
        vec![
            Coordinate::new(50.0, 8.0),
            Coordinate::new(50.0, 8.01),
            Coordinate::new(50.005, 8.01),
            Coordinate::new(50.005, 8.005),
            Coordinate::new(50.01, 8.005),
            Coordinate::new(50.01, 8.0),
        ],
    )
}

#[test]
fn test_concave_polygon_stays_inside() {
    let shape = l_shape();
    for north_south in [false, true] {
        let params = GenerationParameters {
            line_spacing: 60.0,
            is_north_south: north_south,
            ..GenerationParameters::default()
        };
        let wps = PolygonStrategy::default().generate(&shape, &params).unwrap();
        assert!(!wps.is_empty());
        for wp in &wps {
            assert!(is_point_in_polygon(&shape.boundary, wp.latitude, wp.longitude));
            let in_notch = wp.latitude > 50.005 && wp.longitude > 8.005;
            assert!(!in_notch, "waypoint {} inside the notch", wp.index);
        }
    }
}

#[test]
fn test_indices_consecutive() {
    let params = GenerationParameters {
        line_spacing: 60.0,
        starting_index: 100,
        ..GenerationParameters::default()
    };
    let wps = PolygonStrategy::default().generate(&l_shape(), &params).unwrap();
    for (i, wp) in wps.iter().enumerate() {
        assert_eq!(wp.index, 100 + i as u32);
    }
}

#[test]
fn test_camera_footprint_widens_spacing() {
    let plain = GenerationParameters {
        line_spacing: 20.0,
        ..GenerationParameters::default()
    };
    let with_camera = GenerationParameters {
        altitude: 120.0,
        camera: Some(CameraParameters {
            focal_length: 8.8,
            sensor_width: 13.2,
            sensor_height: 8.8,
            overlap_percent: 70.0,
            manual_speed_set: false,
        }),
        ..plain.clone()
    };

    let dense = PolygonStrategy::default().generate(&l_shape(), &plain).unwrap();
    let sparse = PolygonStrategy::default().generate(&l_shape(), &with_camera).unwrap();
    // 120 m · 13.2 / 8.8 · 0.3 = 54 m between lines instead of 20 m.
    assert!(sparse.len() < dense.len());
}
