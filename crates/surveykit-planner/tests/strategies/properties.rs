//! Property-based checks over randomly generated shapes.

use proptest::prelude::*;
use surveykit_core::{Coordinate, GenerationParameters, ShapeDescriptor};
use surveykit_planner::geometry::{haversine_distance, is_point_in_polygon};
use surveykit_planner::{
    CircleStrategy, PolygonStrategy, PolylineStrategy, RectangleStrategy, ShapeStrategy,
    WaypointOrchestrator,
};

fn rectangle(lat: f64, lng: f64, dlat: f64, dlng: f64) -> ShapeDescriptor {
    ShapeDescriptor::rectangle(
        "r",
        Coordinate::new(lat, lng),
        Coordinate::new(lat + dlat, lng + dlng),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn indices_are_consecutive_from_start(
        lat in -60.0_f64..60.0,
        lng in -170.0_f64..170.0,
        dlat in 0.0_f64..0.01,
        dlng in 0.0_f64..0.01,
        start in 0_u32..10_000,
        north_south in any::<bool>(),
    ) {
        let params = GenerationParameters {
            line_spacing: 50.0,
            starting_index: start,
            is_north_south: north_south,
            ..GenerationParameters::default()
        };
        let shapes = [
            rectangle(lat, lng, dlat, dlng),
            ShapeDescriptor::circle("c", Coordinate::new(lat + 1.0, lng), 150.0),
        ];
        let wps = WaypointOrchestrator::new().generate(&shapes, &params);
        prop_assert!(!wps.is_empty());
        for (i, wp) in wps.iter().enumerate() {
            prop_assert_eq!(wp.index, start + i as u32);
        }
    }

    #[test]
    fn circle_waypoints_lie_on_radius(
        lat in -70.0_f64..70.0,
        lng in -179.0_f64..179.0,
        radius in 20.0_f64..5_000.0,
    ) {
        prop_assume!(lat.abs() > 0.01 || lng.abs() > 0.01);
        let shape = ShapeDescriptor::circle("c", Coordinate::new(lat, lng), radius);
        let wps = CircleStrategy.generate(&shape, &GenerationParameters::default()).unwrap();
        prop_assert!(wps.len() >= 24);
        for wp in &wps {
            let d = haversine_distance(lat, lng, wp.latitude, wp.longitude);
            prop_assert!((d - radius).abs() < 1.0, "distance {} for radius {}", d, radius);
        }
    }

    #[test]
    fn polygon_waypoints_are_inside(
        lat in -60.0_f64..60.0,
        lng in -170.0_f64..170.0,
        a in (0.0_f64..0.01, 0.0_f64..0.01),
        b in (0.0_f64..0.01, 0.0_f64..0.01),
        c in (0.0_f64..0.01, 0.0_f64..0.01),
        north_south in any::<bool>(),
    ) {
        let vertices = vec![
            Coordinate::new(lat + a.0, lng + a.1),
            Coordinate::new(lat + b.0, lng + b.1),
            Coordinate::new(lat + c.0, lng + c.1),
        ];
        let params = GenerationParameters {
            line_spacing: 40.0,
            is_north_south: north_south,
            ..GenerationParameters::default()
        };

        let polygon = ShapeDescriptor::polygon("p", vertices.clone());
        for wp in PolygonStrategy::default().generate(&polygon, &params).unwrap() {
            prop_assert!(is_point_in_polygon(&vertices, wp.latitude, wp.longitude));
        }

        let mut ring = vertices.clone();
        ring.push(vertices[0]);
        let closed = ShapeDescriptor::polyline("ring", ring);
        let covered = PolylineStrategy::default().generate(&closed, &params);
        prop_assert!(covered.is_ok(), "ring coverage failed: {:?}", covered);
        for wp in covered.unwrap() {
            prop_assert!(is_point_in_polygon(&vertices, wp.latitude, wp.longitude));
        }
    }

    #[test]
    fn longer_photo_interval_never_adds_waypoints(
        lat in -60.0_f64..60.0,
        lng in -170.0_f64..170.0,
        dlat in 0.0005_f64..0.01,
        dlng in 0.0005_f64..0.01,
        interval in 0.5_f64..10.0,
        extra in 0.0_f64..10.0,
    ) {
        let short = GenerationParameters {
            line_spacing: 60.0,
            photo_interval: interval,
            ..GenerationParameters::default()
        };
        let long = GenerationParameters {
            photo_interval: interval + extra,
            ..short.clone()
        };

        let rect = rectangle(lat, lng, dlat, dlng);
        let rect_short = RectangleStrategy::default().generate(&rect, &short).unwrap();
        let rect_long = RectangleStrategy::default().generate(&rect, &long).unwrap();
        prop_assert!(rect_long.len() <= rect_short.len());

        let path = ShapeDescriptor::polyline(
            "path",
            vec![
                Coordinate::new(lat, lng),
                Coordinate::new(lat + dlat, lng),
                Coordinate::new(lat + dlat, lng + dlng),
            ],
        );
        let path_short = PolylineStrategy::default().generate(&path, &short).unwrap();
        let path_long = PolylineStrategy::default().generate(&path, &long).unwrap();
        prop_assert!(path_long.len() <= path_short.len());
    }

    #[test]
    fn generation_is_deterministic(
        lat in -60.0_f64..60.0,
        lng in -170.0_f64..170.0,
        dlat in 0.0_f64..0.005,
        dlng in 0.0_f64..0.005,
    ) {
        let shape = rectangle(lat, lng, dlat, dlng);
        let params = GenerationParameters::default();
        let first = RectangleStrategy::default().generate(&shape, &params).unwrap();
        let second = RectangleStrategy::default().generate(&shape, &params).unwrap();
        prop_assert_eq!(first, second);
    }
}
