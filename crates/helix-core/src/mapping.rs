//! Pure functions from normalised scroll progress to scene parameters.
//!
//! All of these are total over `f32` input: progress is clamped to \[0, 1\]
//! first, so callers can pass raw values without checking.

use crate::constants::{
    CAMERA_BASE_DISTANCE, CAMERA_DISTANCE_SWING, SKELETON_SCROLL_TURN,
};
use std::f32::consts::PI;

#[inline]
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Camera orbit angle: half a turn across the whole scroll range.
#[inline]
pub fn orbit_angle(progress: f32) -> f32 {
    clamp_progress(progress) * PI
}

/// Camera distance: one smooth in-and-out breath, bounded to \[6.7, 8.3\].
#[inline]
pub fn camera_distance(progress: f32) -> f32 {
    CAMERA_BASE_DISTANCE + CAMERA_DISTANCE_SWING * (PI * clamp_progress(progress)).sin()
}

/// Scroll-driven part of the skeleton's rotation, added to its idle spin.
#[inline]
pub fn skeleton_rotation_offset(progress: f32) -> f32 {
    clamp_progress(progress) * PI * SKELETON_SCROLL_TURN
}

/// Coarse section index for `progress` over `item_count` items.
///
/// A non-decreasing step function; progress 1 lands on the last item. `None`
/// only when there are no items.
#[inline]
pub fn active_index_from_progress(progress: f32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let stepped = (clamp_progress(progress) * item_count as f32).floor() as usize;
    Some(stepped.min(item_count - 1))
}

/// All four mappings evaluated at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMapping {
    pub orbit_angle: f32,
    pub camera_distance: f32,
    pub skeleton_offset: f32,
    pub section_index: Option<usize>,
}

impl ScrollMapping {
    pub fn from_progress(progress: f32, item_count: usize) -> Self {
        Self {
            orbit_angle: orbit_angle(progress),
            camera_distance: camera_distance(progress),
            skeleton_offset: skeleton_rotation_offset(progress),
            section_index: active_index_from_progress(progress, item_count),
        }
    }
}
