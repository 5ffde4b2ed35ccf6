// Host-side tests for the scroll mapping functions.

use helix_core::*;
use std::f32::consts::PI;

const EPS: f32 = 1e-5;

fn sweep(steps: usize) -> impl Iterator<Item = f32> {
    (0..=steps).map(move |i| i as f32 / steps as f32)
}

#[test]
fn orbit_angle_is_monotonic_and_bounded() {
    let mut prev = orbit_angle(0.0);
    assert_eq!(prev, 0.0);
    for p in sweep(1000) {
        let a = orbit_angle(p);
        assert!(a >= prev, "orbit angle decreased at p={p}");
        assert!((0.0..=PI).contains(&a));
        prev = a;
    }
    assert!((orbit_angle(1.0) - PI).abs() < EPS);
}

#[test]
fn camera_distance_stays_in_breathing_band() {
    for p in sweep(1000) {
        let d = camera_distance(p);
        assert!(d >= 6.7 - EPS && d <= 8.3 + EPS, "distance {d} out of band at p={p}");
    }
    assert!((camera_distance(0.0) - 7.5).abs() < EPS);
    assert!((camera_distance(1.0) - 7.5).abs() < EPS);
    assert!((camera_distance(0.5) - 8.3).abs() < EPS);
}

#[test]
fn skeleton_offset_reaches_three_tenths_of_pi() {
    assert_eq!(skeleton_rotation_offset(0.0), 0.0);
    assert!((skeleton_rotation_offset(1.0) - 0.3 * PI).abs() < EPS);
    assert!(skeleton_rotation_offset(0.25) < skeleton_rotation_offset(0.75));
}

#[test]
fn active_index_scenarios_for_six_items() {
    assert_eq!(active_index_from_progress(0.0, 6), Some(0));
    assert_eq!(active_index_from_progress(0.5, 6), Some(3));
    assert_eq!(active_index_from_progress(0.999, 6), Some(5));
    assert_eq!(active_index_from_progress(1.0, 6), Some(5));
}

#[test]
fn active_index_is_a_non_decreasing_step() {
    let mut prev = 0usize;
    for p in sweep(997) {
        let i = active_index_from_progress(p, 6).unwrap_or(usize::MAX);
        assert!(i >= prev && i < 6, "index {i} at p={p}");
        prev = i;
    }
}

#[test]
fn active_index_is_none_without_items() {
    assert_eq!(active_index_from_progress(0.3, 0), None);
}

#[test]
fn mappings_clamp_out_of_range_progress() {
    assert_eq!(orbit_angle(-2.0), 0.0);
    assert!((orbit_angle(3.0) - PI).abs() < EPS);
    assert_eq!(orbit_angle(f32::NAN), 0.0);
    assert_eq!(active_index_from_progress(7.0, 4), Some(3));
    assert_eq!(active_index_from_progress(-1.0, 4), Some(0));
}

#[test]
fn scroll_mapping_bundles_all_four() {
    let m = ScrollMapping::from_progress(0.5, 6);
    assert!((m.orbit_angle - PI / 2.0).abs() < EPS);
    assert!((m.camera_distance - 8.3).abs() < EPS);
    assert!((m.skeleton_offset - 0.15 * PI).abs() < EPS);
    assert_eq!(m.section_index, Some(3));
}
