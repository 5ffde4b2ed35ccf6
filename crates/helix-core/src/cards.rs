//! Per-card presentation state: the eased scale/opacity/offset that make the
//! active card swing forward, and the card's world orientation on the helix.

use crate::constants::{
    CARD_EMISSIVE, CARD_FORWARD_OFFSET, CARD_HOVER_EMISSIVE, CARD_HOVER_OPACITY,
    CARD_HOVER_SCALE, CARD_HOVER_TILT, CARD_INITIAL_OPACITY, CARD_LOOK_Y_FACTOR, CARD_OPACITY,
    CARD_PITCH_TILT, CARD_ROLL_TILT, CARD_SCALE, HOVER_TILT_LERP,
};
use crate::helix::CardTransform;
use crate::smoothing::{approach, approach_vec2, frame_alpha};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[inline]
fn pick(pair: (f32, f32), active: bool) -> f32 {
    if active {
        pair.0
    } else {
        pair.1
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    pub scale: f32,
    pub opacity: f32,
    pub forward_offset: f32,
    pub emissive: f32,
    pub hover_tilt: Vec2,
}

impl Default for CardVisual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: CARD_INITIAL_OPACITY,
            forward_offset: 0.0,
            emissive: CARD_EMISSIVE.1,
            hover_tilt: Vec2::ZERO,
        }
    }
}

impl CardVisual {
    /// Ease toward the active/inactive targets. Hover only counts on the active card.
    pub fn step(&mut self, active: bool, hovered: bool, pointer: Vec2, lerp: f32, dt_sec: f32) {
        let hovered = hovered && active;
        let a = frame_alpha(lerp, dt_sec);
        let hover_scale = if hovered { CARD_HOVER_SCALE } else { 1.0 };
        let hover_opacity = if hovered { CARD_HOVER_OPACITY } else { 0.0 };
        self.scale = approach(self.scale, pick(CARD_SCALE, active) * hover_scale, a);
        self.opacity = approach(self.opacity, pick(CARD_OPACITY, active) + hover_opacity, a);
        self.forward_offset = approach(self.forward_offset, pick(CARD_FORWARD_OFFSET, active), a);
        // emissive snaps, it is not eased
        self.emissive = pick(CARD_EMISSIVE, active) + if hovered { CARD_HOVER_EMISSIVE } else { 0.0 };

        let tilt_target = if hovered {
            Vec2::new(pointer.y, pointer.x) * CARD_HOVER_TILT
        } else {
            Vec2::ZERO
        };
        self.hover_tilt = approach_vec2(self.hover_tilt, tilt_target, frame_alpha(HOVER_TILT_LERP, dt_sec));
    }

    /// World transform of the card.
    pub fn world_matrix(&self, card: &CardTransform) -> Mat4 {
        let translation = card.position + Vec3::Z * self.forward_offset;
        let rotation = card_orientation(card.position, card.rotation_angle, self.hover_tilt);
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, translation)
    }
}

/// Orientation of a card at `position` whose helix angle is `angle`.
///
/// The card turns about Y to face `(0, y * 0.3, 0)`, then gets a small roll and
/// pitch tied to its angle, plus any hover tilt given as (pitch, yaw).
pub fn card_orientation(position: Vec3, angle: f32, hover_tilt: Vec2) -> Quat {
    let look_at = Vec3::new(0.0, position.y * CARD_LOOK_Y_FACTOR, 0.0);
    let d = look_at - position;
    let yaw = if d.x == 0.0 && d.z == 0.0 {
        0.0
    } else {
        d.x.atan2(d.z)
    };
    let pitch = angle.cos() * CARD_PITCH_TILT + hover_tilt.x;
    let roll = angle.sin() * CARD_ROLL_TILT;
    Quat::from_euler(EulerRot::XYZ, pitch, yaw + hover_tilt.y, roll)
}
