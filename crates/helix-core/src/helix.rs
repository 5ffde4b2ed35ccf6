//! Helix layout engine.
//!
//! Places every card on a parametric spiral around the skeleton's vertical
//! axis. Each card's fractional position `t` is its index share of the helix
//! plus a scroll-driven offset, wrapped into \[0, 1), so cards cycle round the
//! path continuously as the page scrolls. The whole set is recomputed from
//! `(index, count, progress)` every frame; nothing is carried between calls.

use crate::constants::{
    DEPTH_WEIGHT_FORWARD, DEPTH_WEIGHT_Z, HELIX_BASE_Y, HELIX_RADIUS, HELIX_RADIUS_VARIATION,
    HELIX_SCROLL_MULTIPLIER, HELIX_TOTAL_SWEEP, HELIX_VERTICAL_SPAN,
};
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixParams {
    pub radius: f32,
    pub radius_variation: f32,
    pub base_y: f32,
    pub vertical_span: f32,
    pub total_sweep: f32,
    pub scroll_multiplier: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: HELIX_RADIUS,
            radius_variation: HELIX_RADIUS_VARIATION,
            base_y: HELIX_BASE_Y,
            vertical_span: HELIX_VERTICAL_SPAN,
            total_sweep: HELIX_TOTAL_SWEEP,
            scroll_multiplier: HELIX_SCROLL_MULTIPLIER,
        }
    }
}

/// Weights of the camera-facing prominence score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthWeights {
    pub z: f32,
    pub forward: f32,
}

impl Default for DepthWeights {
    fn default() -> Self {
        Self {
            z: DEPTH_WEIGHT_Z,
            forward: DEPTH_WEIGHT_FORWARD,
        }
    }
}

impl DepthWeights {
    #[inline]
    pub fn score(&self, z: f32, forward_factor: f32) -> f32 {
        z * self.z + forward_factor * self.forward
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardTransform {
    /// Fractional position along the helix, in \[0, 1).
    pub t: f32,
    pub position: Vec3,
    /// Angle around the axis, `t * sweep`.
    pub rotation_angle: f32,
    /// +1 facing the camera's home direction, -1 directly behind.
    pub forward_factor: f32,
    pub depth_score: f32,
}

/// Fractional part wrapped into \[0, 1), also for negative input.
#[inline]
pub fn wrap_unit(x: f32) -> f32 {
    let f = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

/// Helix parameter of card `index` out of `count` at the given scroll progress.
#[inline]
pub fn helix_t(index: usize, count: usize, progress: f32, params: &HelixParams) -> f32 {
    if count == 0 {
        return 0.0;
    }
    wrap_unit(index as f32 / count as f32 + progress * params.scroll_multiplier)
}

/// Point on the helix at parameter `t`.
#[inline]
pub fn helix_point(t: f32, params: &HelixParams) -> Vec3 {
    let angle = t * params.total_sweep;
    let radius = params.radius + params.radius_variation * (4.0 * PI * t).sin();
    Vec3::new(
        radius * angle.cos(),
        params.base_y + (t - 0.5) * params.vertical_span,
        radius * angle.sin(),
    )
}

pub fn card_transform(
    index: usize,
    count: usize,
    progress: f32,
    params: &HelixParams,
    weights: &DepthWeights,
) -> CardTransform {
    let t = helix_t(index, count, progress, params);
    let angle = t * params.total_sweep;
    let position = helix_point(t, params);
    let forward_factor = angle.cos();
    CardTransform {
        t,
        position,
        rotation_angle: angle,
        forward_factor,
        depth_score: weights.score(position.z, forward_factor),
    }
}

/// Transforms for all `count` cards, in catalog order.
pub fn layout(
    count: usize,
    progress: f32,
    params: &HelixParams,
    weights: &DepthWeights,
) -> Vec<CardTransform> {
    let mut out = Vec::with_capacity(count);
    layout_into(&mut out, count, progress, params, weights);
    out
}

/// Same as [`layout`], replacing the contents of `out` to reuse its allocation.
pub fn layout_into(
    out: &mut Vec<CardTransform>,
    count: usize,
    progress: f32,
    params: &HelixParams,
    weights: &DepthWeights,
) {
    out.clear();
    out.extend((0..count).map(|i| card_transform(i, count, progress, params, weights)));
}
