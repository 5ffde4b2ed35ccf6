// Host-side tests for the packed frame buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod export {
    include!("../src/export.rs");
}

use export::*;
use helix_core::{Catalog, Scene, SceneConfig};

fn scene() -> Scene {
    let config = SceneConfig {
        particle_count: 0,
        ..SceneConfig::default()
    };
    let mut scene = Scene::new(Catalog::builtin(), config);
    scene.tick(1.0 / 60.0);
    scene
}

#[test]
fn records_are_whole_vec4s() {
    assert_eq!(HEADER_FLOATS, 32);
    assert_eq!(CARD_FLOATS, 32);
    assert_eq!(HEADER_FLOATS % 4, 0);
}

#[test]
fn packed_frame_has_header_plus_one_record_per_card() {
    let scene = scene();
    let mut out = vec![99.0; 3];
    pack_frame(&mut out, &scene.frame(), None);
    assert_eq!(out.len(), HEADER_FLOATS + 6 * CARD_FLOATS);
    assert!(out.iter().all(|v| v.is_finite()));

    // second pack replaces instead of appending
    pack_frame(&mut out, &scene.frame(), None);
    assert_eq!(out.len(), HEADER_FLOATS + 6 * CARD_FLOATS);
}

#[test]
fn header_carries_count_and_active_index() {
    let scene = scene();
    let frame = scene.frame();
    let h = frame_header(&frame);
    assert_eq!(h.meta[2], 6.0);
    assert_eq!(h.meta[3], 1.0);
    assert_eq!(h.skeleton[3], frame.progress);
    assert_eq!(h.target[3], frame.pose.distance);
}

#[test]
fn empty_scene_marks_no_active_card() {
    let scene = Scene::new(
        Catalog::default(),
        SceneConfig {
            particle_count: 0,
            ..SceneConfig::default()
        },
    );
    let mut out = Vec::new();
    pack_frame(&mut out, &scene.frame(), None);
    assert_eq!(out.len(), HEADER_FLOATS);
    assert_eq!(frame_header(&scene.frame()).meta[3], -1.0);
}

#[test]
fn card_flags_mark_active_and_hovered() {
    let scene = scene();
    let cards = card_instances(&scene.frame(), Some(3));
    let active: Vec<usize> = (0..cards.len()).filter(|&i| cards[i].score[3] == 1.0).collect();
    let hovered: Vec<usize> = (0..cards.len()).filter(|&i| cards[i].accent[3] == 1.0).collect();
    assert_eq!(active, [1]);
    assert_eq!(hovered, [3]);
    let accent = scene.catalog().get(1).map(|e| e.accent.rgb).unwrap_or_default();
    assert_eq!(cards[1].accent[..3], accent);
}
