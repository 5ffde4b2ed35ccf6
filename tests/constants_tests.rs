// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use helix_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [CAMERA_SMOOTHING, SKELETON_BLEND, TILT_SMOOTHING, CARD_LERP, HOVER_TILT_LERP] {
        assert!(f > 0.0 && f < 1.0);
    }
    assert!(REFERENCE_FPS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn helix_stays_clear_of_the_axis() {
    assert!(HELIX_RADIUS > HELIX_RADIUS_VARIATION);
    assert!(HELIX_VERTICAL_SPAN > 0.0);
    assert!(HELIX_TOTAL_SWEEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_stays_outside_the_helix() {
    assert!(CAMERA_BASE_DISTANCE - CAMERA_DISTANCE_SWING > HELIX_RADIUS + HELIX_RADIUS_VARIATION);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_targets_favour_the_active_card() {
    assert!(CARD_SCALE.0 > CARD_SCALE.1);
    assert!(CARD_OPACITY.0 > CARD_OPACITY.1);
    assert!(CARD_OPACITY.0 + CARD_HOVER_OPACITY <= 1.0);
    assert!(CARD_FORWARD_OFFSET.0 > CARD_FORWARD_OFFSET.1);
    assert!(CARD_EMISSIVE.0 > CARD_EMISSIVE.1);
    assert!(CARD_INITIAL_OPACITY > CARD_OPACITY.1 && CARD_INITIAL_OPACITY < CARD_OPACITY.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_wiring_is_sane() {
    assert!(MAX_FRAME_DT_SEC > 1.0 / REFERENCE_FPS);
    let ids = [
        CANVAS_ID,
        SPACER_ID,
        INFO_PANEL_ID,
        INFO_TITLE_ID,
        INFO_SUBTITLE_ID,
        INFO_DESCRIPTION_ID,
        INFO_TAGS_ID,
        NAVBAR_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        assert!(ids[i + 1..].iter().all(|b| b != a), "duplicate id {a}");
    }
    assert_eq!(ACTIVE_CHANGE_EVENT, ACTIVE_CHANGE_EVENT.to_lowercase());
}
