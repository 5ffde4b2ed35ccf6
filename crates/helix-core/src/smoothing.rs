//! Exponential smoothing primitives.
//!
//! Each smoothed value moves a fixed fraction of the remaining distance toward
//! its target per frame. Factors are expressed per frame at
//! [`REFERENCE_FPS`]; [`frame_alpha`] converts one into the equivalent
//! fraction for an arbitrary frame time so motion speed does not depend on the
//! display's refresh rate.

use crate::constants::{CAMERA_SMOOTHING, CARD_LERP, REFERENCE_FPS, SKELETON_BLEND, TILT_SMOOTHING};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingParams {
    pub camera: f32,
    pub skeleton: f32,
    pub tilt: f32,
    pub card: f32,
}

impl Default for SmoothingParams {
    fn default() -> Self {
        Self {
            camera: CAMERA_SMOOTHING,
            skeleton: SKELETON_BLEND,
            tilt: TILT_SMOOTHING,
            card: CARD_LERP,
        }
    }
}

/// Fraction to apply for a frame of `dt_sec`, given a per-reference-frame factor.
///
/// At exactly one reference frame this returns `factor` unchanged. The result
/// is always in \[0, 1\], so a step never overshoots its target.
#[inline]
pub fn frame_alpha(factor: f32, dt_sec: f32) -> f32 {
    let factor = factor.clamp(0.0, 1.0);
    if !dt_sec.is_finite() {
        return factor;
    }
    if dt_sec <= 0.0 {
        return 0.0;
    }
    let frames = dt_sec * REFERENCE_FPS;
    (1.0 - (1.0 - factor).powf(frames)).clamp(0.0, 1.0)
}

#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

#[inline]
pub fn approach_vec2(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    current + (target - current) * alpha
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}
