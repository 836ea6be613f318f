use quickhull3d::{
    build_many, build_many_with_config, BuildConfig, Degeneracy, HullError, QuickHull3d, Vec3,
};

fn tetrahedron() -> Vec<Vec3> {
    vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]
}

#[test]
fn tetrahedron_hull() {
    let mut hull = QuickHull3d::new();
    hull.build(&tetrahedron()).unwrap();
    assert_eq!(hull.num_vertices(), 4);
    assert_eq!(hull.num_faces(), 4);
    assert_eq!(hull.vertices(), tetrahedron());
    for face in hull.faces() {
        assert_eq!(face.len(), 3);
    }
    hull.check().unwrap();
}

#[test]
fn coplanar_square_is_rejected() {
    let points = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let mut hull = QuickHull3d::new();
    let err = hull.build(&points).unwrap_err();
    assert_eq!(err, HullError::DegenerateInput(Degeneracy::Coplanar));
    assert_eq!(hull.num_faces(), 0);
}

#[test]
fn collinear_points_are_rejected() {
    let points: Vec<Vec3> = (0..6).map(|i| Vec3::splat(i as f64)).collect();
    let mut hull = QuickHull3d::new();
    match hull.build(&points) {
        Err(HullError::DegenerateInput(Degeneracy::Collinear)) => {}
        other => panic!("expected collinear rejection, got {other:?}"),
    }
}

#[test]
fn coincident_points_are_rejected() {
    let points = vec![Vec3::new(2.0, -1.0, 3.0); 10];
    let mut hull = QuickHull3d::new();
    match hull.build(&points) {
        Err(HullError::DegenerateInput(Degeneracy::Coincident)) => {}
        other => panic!("expected coincident rejection, got {other:?}"),
    }
}

#[test]
fn too_few_points_are_rejected() {
    let mut hull = QuickHull3d::new();
    let err = hull.build(&tetrahedron()[..3]).unwrap_err();
    assert!(matches!(err, HullError::InvalidInput { .. }));
    assert!(err.to_string().contains("at least 4"));
}

#[test]
fn short_coordinate_buffer_is_rejected() {
    let mut hull = QuickHull3d::new();
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    let err = hull.build_from_coords(&coords, 4).unwrap_err();
    assert!(matches!(err, HullError::InvalidInput { .. }));
}

#[test]
fn non_finite_points_are_rejected() {
    let mut points = tetrahedron();
    points.push(Vec3::new(0.5, f64::INFINITY, 0.5));
    let mut hull = QuickHull3d::new();
    let err = hull.build(&points).unwrap_err();
    assert!(matches!(err, HullError::InvalidInput { .. }));
    assert!(err.to_string().contains("point 4"));
}

#[test]
fn explicit_tolerance_is_reported() {
    let mut hull = QuickHull3d::new();
    hull.set_explicit_distance_tolerance(1e-3).unwrap();
    hull.build(&tetrahedron()).unwrap();
    assert_eq!(hull.distance_tolerance(), 1e-3);
    assert_eq!(hull.explicit_distance_tolerance(), Some(1e-3));
}

#[test]
fn wide_tolerance_absorbs_near_points() {
    let mut points = tetrahedron();
    // just outside the face x + y + z = 1
    points.push(Vec3::splat(1.0 / 3.0 + 1e-6));

    let mut tight = QuickHull3d::new();
    tight.build(&points).unwrap();
    assert_eq!(tight.num_vertices(), 5);

    let config = BuildConfig::with_explicit_tolerance(1e-4).unwrap();
    let mut loose = QuickHull3d::with_config(config);
    loose.build(&points).unwrap();
    assert_eq!(loose.num_vertices(), 4);
    loose.check().unwrap();
}

#[test]
fn rebuild_replaces_previous_hull() {
    let mut hull = QuickHull3d::new();
    hull.build(&tetrahedron()).unwrap();
    let cube: Vec<Vec3> = (0..8)
        .map(|i| Vec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, (i >> 2) as f64))
        .collect();
    hull.build(&cube).unwrap();
    assert_eq!(hull.num_vertices(), 8);
    assert_eq!(hull.num_faces(), 6);
}

#[test]
fn batch_results_keep_input_order() {
    let flat = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(1.0, 1.0, 0.0)];
    let shifted: Vec<Vec3> = tetrahedron().iter().map(|&p| p + Vec3::splat(10.0)).collect();
    let sets = vec![tetrahedron(), flat, shifted.clone(), vec![Vec3::ZERO; 2]];

    let results = build_many(&sets);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().num_faces(), 4);
    assert_eq!(
        results[1].as_ref().unwrap_err(),
        &HullError::DegenerateInput(Degeneracy::Coplanar)
    );
    assert_eq!(results[2].as_ref().unwrap().vertices(), shifted);
    assert!(matches!(results[3], Err(HullError::InvalidInput { .. })));
}

#[test]
fn batch_applies_config_to_every_build() {
    let config = BuildConfig::with_explicit_tolerance(1e-5).unwrap();
    let sets = vec![tetrahedron(); 8];
    for result in build_many_with_config(&sets, config) {
        assert_eq!(result.unwrap().distance_tolerance(), 1e-5);
    }
}
