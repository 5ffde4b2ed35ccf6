// Host-side tests for exponential smoothing, the camera rig and the skeleton spin.

use glam::{Vec2, Vec3};
use helix_core::*;
use std::f32::consts::PI;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn one_reference_frame_uses_the_factor_as_is() {
    assert!((frame_alpha(0.05, FRAME) - 0.05).abs() < 1e-4);
    assert!((frame_alpha(0.1, FRAME) - 0.1).abs() < 1e-4);
}

#[test]
fn alpha_is_bounded_and_monotonic_in_dt() {
    assert_eq!(frame_alpha(0.05, 0.0), 0.0);
    assert_eq!(frame_alpha(0.05, -1.0), 0.0);
    assert_eq!(frame_alpha(0.05, f32::NAN), 0.05);
    let mut prev = 0.0;
    for i in 1..200 {
        let a = frame_alpha(0.05, i as f32 * 0.005);
        assert!(a >= prev && a <= 1.0);
        prev = a;
    }
    assert_eq!(frame_alpha(2.0, FRAME), 1.0);
}

#[test]
fn two_half_frames_equal_one_full_frame() {
    let a = approach(approach(0.0, 1.0, frame_alpha(0.05, FRAME / 2.0)), 1.0, frame_alpha(0.05, FRAME / 2.0));
    let b = approach(0.0, 1.0, frame_alpha(0.05, FRAME));
    assert!((a - b).abs() < 1e-5);
}

#[test]
fn approach_never_overshoots() {
    let mut x = 0.0_f32;
    for _ in 0..500 {
        let next = approach(x, 10.0, 0.05);
        assert!(next >= x && next <= 10.0);
        x = next;
    }
}

#[test]
fn constant_target_converges_geometrically() {
    let target = Vec3::new(7.5, 0.0, 0.0);
    let mut eye = CAMERA_HOME;
    let start = (target - eye).length();
    for k in 1..=300 {
        eye = approach_vec3(eye, target, 0.05);
        let expected = start * 0.95_f32.powi(k);
        assert!(((target - eye).length() - expected).abs() < 1e-3);
    }
    assert!((target - eye).length() < 1e-3);
}

#[test]
fn target_eye_orbits_the_origin() {
    let pose = CameraPose {
        orbit_angle: 0.0,
        distance: 7.5,
        target: Vec3::ZERO,
    };
    assert!((target_eye(&pose) - Vec3::new(7.5, 0.0, 0.0)).length() < 1e-5);
    let half = CameraPose {
        orbit_angle: PI,
        ..pose
    };
    let e = target_eye(&half);
    assert!((e.x + 7.5).abs() < 1e-4);
    assert!((e.y - 0.8).abs() < 1e-5);
}

#[test]
fn rig_starts_home_and_settles_on_target() {
    let mut rig = CameraRig::new();
    assert_eq!(rig.eye(), CAMERA_HOME);
    let pose = CameraPose {
        orbit_angle: PI / 2.0,
        distance: 8.3,
        target: Vec3::ZERO,
    };
    for _ in 0..600 {
        rig.step(&pose, Vec2::ZERO, CAMERA_SMOOTHING, TILT_SMOOTHING, FRAME);
    }
    assert!((rig.eye() - target_eye(&pose)).length() < 1e-3);
    assert!(rig.tilt().length() < 1e-6);
}

#[test]
fn pointer_tilt_is_small_and_smoothed() {
    let t = pointer_tilt_target(Vec2::new(1.0, -1.0));
    assert!((t.x + 0.15).abs() < 1e-6); // pitch follows pointer y
    assert!((t.y - 0.15).abs() < 1e-6); // yaw follows pointer x
    assert_eq!(pointer_tilt_target(Vec2::new(5.0, 0.0)), pointer_tilt_target(Vec2::new(1.0, 0.0)));

    let mut rig = CameraRig::new();
    let pose = CameraPose::default();
    rig.step(&pose, Vec2::new(1.0, 0.0), CAMERA_SMOOTHING, TILT_SMOOTHING, FRAME);
    let first = rig.tilt().y;
    assert!(first > 0.0 && first < 0.15);
}

#[test]
fn camera_matrices_are_finite() {
    let rig = CameraRig::new();
    let cam = rig.camera(&CameraPose::default(), 16.0 / 9.0);
    assert!((cam.fovy_radians - 50.0_f32.to_radians()).abs() < 1e-6);
    assert!(cam.view_projection().is_finite());
    let bad = rig.camera(&CameraPose::default(), 0.0);
    assert_eq!(bad.aspect, 1.0);
}

#[test]
fn skeleton_adds_idle_spin_to_scroll_offset() {
    let mut spin = SkeletonSpin::new();
    let target = skeleton_rotation_offset(1.0);
    for _ in 0..600 {
        spin.step(target, SKELETON_BLEND, FRAME);
    }
    // ten seconds of idle spin at 0.05 rad/s
    assert!((spin.idle() - 0.5).abs() < 1e-3);
    assert!((spin.scroll() - target).abs() < 1e-4);
    assert!((spin.rotation() - (spin.idle() + spin.scroll())).abs() < 1e-6);
}

#[test]
fn skeleton_breathes_around_rest() {
    let mut spin = SkeletonSpin::new();
    for _ in 0..240 {
        spin.step(0.0, SKELETON_BLEND, FRAME);
        let pose = spin.pose();
        assert!(pose.bob.abs() <= 0.15 + 1e-6);
        assert!((pose.scale - 1.0).abs() <= 0.02 + 1e-6);
    }
}

#[test]
fn zero_dt_holds_everything_still() {
    let mut spin = SkeletonSpin::new();
    spin.step(1.0, SKELETON_BLEND, 0.0);
    assert_eq!(spin.rotation(), 0.0);
}
