use approx::assert_abs_diff_eq;
use glam::DVec3;
use slice_nav::core::{Camera, CameraUpdate};

#[test]
fn looking_along_places_eye_on_normal() {
    let camera = Camera::looking_along(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 4.0), 10.0);
    let camera = camera.expect("camera");

    assert_eq!(camera.view_plane_normal, DVec3::Z);
    assert_eq!(camera.position, DVec3::new(1.0, 2.0, 13.0));
    assert_abs_diff_eq!(camera.distance(), 10.0, epsilon = 1e-12);
}

#[test]
fn translated_update_keeps_offset() {
    let camera = Camera::looking_along(DVec3::ZERO, DVec3::X, 5.0).expect("camera");
    let update = CameraUpdate::translated(&camera, DVec3::new(0.5, -1.0, 2.0));
    let moved = camera.with_update(update);

    assert_eq!(moved.offset(), camera.offset());
    assert_eq!(moved.view_plane_normal, camera.view_plane_normal);
    assert_eq!(update.translation_from(&camera), DVec3::new(0.5, -1.0, 2.0));
}

#[test]
fn invalid_camera_inputs_are_rejected() {
    assert!(Camera::new(DVec3::ZERO, DVec3::Z, DVec3::ZERO).is_err());
    assert!(Camera::new(DVec3::splat(f64::NAN), DVec3::Z, DVec3::Z).is_err());
    assert!(Camera::new(DVec3::ZERO, DVec3::splat(f64::INFINITY), DVec3::Z).is_err());
}

#[test]
fn camera_serializes_to_json() {
    let camera = Camera::looking_along(DVec3::ZERO, DVec3::Y, 2.0).expect("camera");
    let json = serde_json::to_string(&camera).expect("serialize");
    let parsed: Camera = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, camera);
}
