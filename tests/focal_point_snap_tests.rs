use approx::assert_abs_diff_eq;
use glam::DVec3;
use slice_nav::core::{SliceRange, SliceSnapMode, snap_focal_point};

fn z_range(min: f64, max: f64) -> SliceRange {
    SliceRange::new(min, max, DVec3::ZERO, DVec3::Z).expect("range")
}

#[test]
fn step_past_range_max_is_clamped() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(0.0, 0.0, 4.0);
    let position = DVec3::new(0.0, 0.0, 24.0);

    let update = snap_focal_point(
        focal,
        position,
        &range,
        DVec3::Z,
        2.0,
        1,
        SliceSnapMode::Continuous,
    )
    .expect("snap");

    assert_abs_diff_eq!(range.project(update.focal_point), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(update.position.z, 25.0, epsilon = 1e-12);
}

#[test]
fn slice_grid_mode_clamps_to_last_slice() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(0.0, 0.0, 4.0);

    let update = snap_focal_point(
        focal,
        DVec3::new(0.0, 0.0, 24.0),
        &range,
        DVec3::Z,
        2.0,
        1,
        SliceSnapMode::SliceGrid,
    )
    .expect("snap");

    assert_abs_diff_eq!(update.focal_point.z, 5.0, epsilon = 1e-12);
}

#[test]
fn in_plane_component_is_preserved() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(3.0, -7.0, 0.0);

    let update = snap_focal_point(
        focal,
        focal + DVec3::new(0.0, 0.0, 10.0),
        &range,
        DVec3::Z,
        1.5,
        -2,
        SliceSnapMode::Continuous,
    )
    .expect("snap");

    assert_eq!(update.focal_point, DVec3::new(3.0, -7.0, -3.0));
    assert_eq!(update.position, DVec3::new(3.0, -7.0, 7.0));
}

#[test]
fn focal_point_outside_range_is_pulled_back_in() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(0.0, 0.0, 9.0);

    let update = snap_focal_point(
        focal,
        focal + DVec3::Z,
        &range,
        DVec3::Z,
        1.0,
        1,
        SliceSnapMode::Continuous,
    )
    .expect("snap");

    assert_abs_diff_eq!(update.focal_point.z, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(update.position.z, 6.0, epsilon = 1e-12);
}

#[test]
fn extreme_delta_lands_on_range_edge() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(0.25, 0.5, 1.0);

    let update = snap_focal_point(
        focal,
        focal + DVec3::new(0.0, 0.0, 3.0),
        &range,
        DVec3::Z,
        0.5,
        i64::MIN,
        SliceSnapMode::Continuous,
    )
    .expect("snap");

    assert_eq!(update.focal_point, DVec3::new(0.25, 0.5, -5.0));
    assert_eq!(update.position, DVec3::new(0.25, 0.5, -2.0));
}

#[test]
fn non_positive_spacing_is_rejected() {
    let range = z_range(-5.0, 5.0);
    for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = snap_focal_point(
            DVec3::ZERO,
            DVec3::Z,
            &range,
            DVec3::Z,
            spacing,
            1,
            SliceSnapMode::Continuous,
        );
        assert!(result.is_err(), "spacing {spacing} should be rejected");
    }
}

#[test]
fn normal_disagreeing_with_range_is_rejected() {
    let range = z_range(-5.0, 5.0);
    let focal = DVec3::new(0.0, 0.0, 1.0);
    let position = DVec3::new(0.0, 0.0, 21.0);

    for normal in [DVec3::X, DVec3::NEG_Z, DVec3::new(0.0, 0.1, 1.0)] {
        let err = snap_focal_point(
            focal,
            position,
            &range,
            normal,
            1.0,
            1,
            SliceSnapMode::Continuous,
        )
        .expect_err("misaligned normal");
        assert!(err.to_string().contains("slice range normal"), "{err}");
    }
}

#[test]
fn unnormalized_normal_along_range_is_accepted() {
    let range = z_range(-5.0, 5.0);

    let update = snap_focal_point(
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 21.0),
        &range,
        DVec3::new(0.0, 0.0, 3.0),
        1.0,
        2,
        SliceSnapMode::Continuous,
    )
    .expect("snap");

    assert_abs_diff_eq!(update.focal_point.z, 3.0, epsilon = 1e-12);
}
