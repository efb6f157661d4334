// Host-side tests for the orbit camera.

use glam::{Vec3, Vec4};
use std::f32::consts::{FRAC_PI_2, PI};
use wish_tree_core::*;

#[test]
fn default_orbit_looks_at_the_tree_from_the_front() {
    let orbit = OrbitCamera::default();
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).length() < 1e-5);

    let cam = orbit.camera(16.0 / 9.0);
    assert!((cam.fovy_radians - 45f32.to_radians()).abs() < 1e-6);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
    assert!(clip.w > 0.0);
}

#[test]
fn zoom_steps_and_clamps() {
    let mut orbit = OrbitCamera::default();
    orbit.zoom(-1.0);
    assert!((orbit.distance - CAMERA_DISTANCE * CAMERA_ZOOM_STEP).abs() < 1e-5);
    orbit.zoom(0.0);
    assert!((orbit.distance - CAMERA_DISTANCE * CAMERA_ZOOM_STEP).abs() < 1e-5);

    for _ in 0..200 {
        orbit.zoom(1.0);
    }
    assert_eq!(orbit.distance, CAMERA_MAX_DISTANCE);
    for _ in 0..200 {
        orbit.zoom(-1.0);
    }
    assert_eq!(orbit.distance, CAMERA_MIN_DISTANCE);
}

#[test]
fn drag_rotates_and_pitch_stops_short_of_the_poles() {
    let mut orbit = OrbitCamera::default();
    // half the viewport height horizontally is half a turn
    orbit.drag(300.0, 0.0, 600.0);
    assert!((orbit.yaw + PI).abs() < 1e-5);

    orbit.drag(0.0, 10_000.0, 600.0);
    assert!(orbit.pitch < FRAC_PI_2 && orbit.pitch > FRAC_PI_2 - 0.02);
    orbit.drag(0.0, -20_000.0, 600.0);
    assert!(orbit.pitch > -FRAC_PI_2);
    assert!((orbit.eye().length() - orbit.distance).abs() < 1e-3);
}

#[test]
fn auto_rotate_turns_at_the_configured_speed() {
    let mut orbit = OrbitCamera::default();
    orbit.update(10.0);
    assert_eq!(orbit.yaw, 0.0);

    orbit.auto_rotate = true;
    // speed 0.5 is half a turn per minute
    orbit.update(60.0);
    assert!((orbit.yaw - PI).abs() < 1e-4);
}
