use truesize::geometry::{Geometry, centroid, rotate_geometry};
use truesize::primitives::LonLat;
use truesize::sphere::{Rotation, angular_distance, build_rotation};

const TOL_DEG: f64 = 1e-6;

fn lon_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { 360.0 - d } else { d }
}

fn assert_lon_lat_close(actual: LonLat, expected: LonLat, tol: f64) {
    assert!(
        (actual.lat - expected.lat).abs() < tol,
        "lat {} vs {}",
        actual.lat,
        expected.lat
    );
    if expected.lat.abs() < 89.0 {
        assert!(
            lon_diff(actual.lon, expected.lon) < tol,
            "lon {} vs {}",
            actual.lon,
            expected.lon
        );
    }
}

const PAIRS: &[((f64, f64), (f64, f64))] = &[
    ((0.0, 0.0), (0.0, 60.0)),
    ((-73.9, 40.7), (139.7, 35.7)),
    ((2.35, 48.85), (-58.4, -34.6)),
    ((-41.0, 74.0), (10.0, 0.0)),
    ((151.2, -33.9), (-0.1, 51.5)),
    ((179.0, 10.0), (-179.0, -10.0)),
];

#[test]
fn rotation_carries_anchor_onto_target() {
    for &(from, to) in PAIRS {
        let rotation = build_rotation(from.into(), to.into());
        assert!(!rotation.is_identity());
        assert_lon_lat_close(rotation.apply(from.into()), to.into(), TOL_DEG);
    }
}

#[test]
fn rotation_preserves_angular_distances() {
    let probes: Vec<LonLat> = [(12.0, 5.0), (-100.0, -20.0), (45.0, 60.0), (170.0, -75.0)]
        .into_iter()
        .map(LonLat::from)
        .collect();

    for &(from, to) in PAIRS {
        let from = LonLat::from(from);
        let to = LonLat::from(to);
        let rotation = build_rotation(from, to);
        for p in &probes {
            let before = angular_distance(*p, from);
            let after = angular_distance(rotation.apply(*p), to);
            assert!((before - after).abs() < 1e-9, "{before} vs {after}");
        }
        let before = angular_distance(probes[0], probes[2]);
        let after = angular_distance(rotation.apply(probes[0]), rotation.apply(probes[2]));
        assert!((before - after).abs() < 1e-9);
    }
}

#[test]
fn identical_endpoints_leave_points_untouched() {
    let anchor = LonLat::new(123.4, -56.7);
    let rotation = build_rotation(anchor, anchor);
    assert_eq!(rotation, Rotation::Identity);
    assert_eq!(rotation.angle(), 0.0);

    for p in [anchor, LonLat::new(-179.999, 89.5), LonLat::new(0.1, 0.2)] {
        let out = rotation.apply(p);
        assert_eq!(out.lon.to_bits(), p.lon.to_bits());
        assert_eq!(out.lat.to_bits(), p.lat.to_bits());
    }
}

#[test]
fn identity_rotation_keeps_geometry_bit_for_bit() {
    let geometry = Geometry::LineString {
        coordinates: vec![vec![0.123456789, 45.987654321, 12.0], vec![-170.5, -80.25]],
    };
    let anchor = LonLat::new(0.123456789, 45.987654321);
    let rotation = build_rotation(anchor, anchor);
    let out = rotate_geometry(&geometry, |p| rotation.apply(p));
    assert_eq!(out, geometry);
}

#[test]
fn antipodal_drag_uses_fallback_axis() {
    // Pole to pole: from.x is ~0, so the x-axis reference is used.
    let rotation = build_rotation(LonLat::new(0.0, 90.0), LonLat::new(0.0, -90.0));
    match rotation {
        Rotation::AxisAngle { axis, angle, .. } => {
            assert!((angle - std::f64::consts::PI).abs() < 1e-6);
            assert!(axis.iter().all(|c| c.is_finite()));
            assert!((axis[0]).abs() < 1e-12);
            assert!((axis[1].abs() - 1.0).abs() < 1e-12);
        }
        Rotation::Identity => panic!("antipodal points must rotate"),
    }
    let moved = rotation.apply(LonLat::new(0.0, 90.0));
    assert!((moved.lat + 90.0).abs() < 1e-5);

    // On the equator from.x is ~1, so the y-axis reference is used.
    let from = LonLat::new(0.0, 0.0);
    let to = LonLat::new(180.0, 0.0);
    let rotation = build_rotation(from, to);
    if let Rotation::AxisAngle { axis, .. } = rotation {
        assert!((axis[2].abs() - 1.0).abs() < 1e-12);
    } else {
        panic!("antipodal points must rotate");
    }
    let moved = rotation.apply(from);
    assert!(moved.lat.abs() < 1e-5);
    assert!(lon_diff(moved.lon, 180.0) < 1e-5);

    // A generic antipodal pair still lands on its target.
    let from = LonLat::new(10.0, -45.0);
    let to = LonLat::new(-170.0, 45.0);
    let moved = build_rotation(from, to).apply(from);
    assert_lon_lat_close(moved, to, 1e-5);
}

#[test]
fn square_dragged_to_sixty_north_is_centred_there() {
    let corners = vec![
        vec![-10.0, -10.0],
        vec![10.0, -10.0],
        vec![10.0, 10.0],
        vec![-10.0, 10.0],
    ];
    let mut ring = corners.clone();
    ring.push(corners[0].clone());
    let square = Geometry::Polygon {
        coordinates: vec![ring],
    };

    let rotation = build_rotation(LonLat::new(0.0, 0.0), LonLat::new(0.0, 60.0));
    let moved = rotate_geometry(&square, |p| rotation.apply(p));

    let Geometry::Polygon { coordinates } = &moved else {
        panic!("rotation must keep the polygon kind");
    };
    assert_eq!(coordinates.len(), 1);
    assert_eq!(coordinates[0].len(), 5);
    assert_eq!(coordinates[0][0], coordinates[0][4]);

    let original_radius = angular_distance(LonLat::new(0.0, 0.0), LonLat::new(10.0, 10.0));
    for corner in &coordinates[0][..4] {
        let lat = corner[1];
        assert!((45.0..72.0).contains(&lat), "corner latitude {lat}");
        let radius = angular_distance(LonLat::new(corner[0], corner[1]), LonLat::new(0.0, 60.0));
        assert!((radius - original_radius).abs() < 1e-9);
    }

    // Bottom corners stay south of the top corners.
    assert!(coordinates[0][0][1] < coordinates[0][3][1]);
    assert!(coordinates[0][1][1] < coordinates[0][2][1]);

    let centre = centroid(&moved).expect("non-empty polygon");
    assert_lon_lat_close(centre, LonLat::new(0.0, 60.0), 1e-6);
}
