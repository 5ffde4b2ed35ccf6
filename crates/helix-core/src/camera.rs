//! Orbit camera rig.
//!
//! The scroll mapping gives an orbit angle and distance; the rig turns those
//! into a target eye position and eases the live eye toward it. Pointer
//! position adds a small parallax tilt on top of the look-at.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_HEIGHT_SWAY, CAMERA_HOME, CAMERA_ZFAR, CAMERA_ZNEAR,
    POINTER_MAX_TILT, POINTER_TILT_SCALE,
};
use crate::smoothing::{approach, approach_vec3, frame_alpha};
use crate::state::CameraPose;
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Parallax tilt (pitch, yaw) applied after the look-at.
    pub tilt: Vec2,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World to view space, including the parallax tilt.
    pub fn view_matrix(&self) -> Mat4 {
        let look = Mat4::look_at_rh(self.eye, self.target, self.up);
        let tilt = Mat4::from_euler(EulerRot::YXZ, self.tilt.y, self.tilt.x, 0.0);
        tilt.inverse() * look
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Eye position the rig is heading for at the given pose.
#[inline]
pub fn target_eye(pose: &CameraPose) -> Vec3 {
    let phi = pose.orbit_angle;
    pose.target
        + Vec3::new(
            phi.cos() * pose.distance,
            (phi * 0.5).sin() * CAMERA_HEIGHT_SWAY,
            phi.sin() * pose.distance,
        )
}

/// Tilt the pointer asks for, as (pitch, yaw) in radians.
#[inline]
pub fn pointer_tilt_target(pointer: Vec2) -> Vec2 {
    let p = pointer.clamp(Vec2::splat(-1.0), Vec2::ONE);
    Vec2::new(p.y, p.x) * POINTER_MAX_TILT * POINTER_TILT_SCALE
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    eye: Vec3,
    tilt: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: CAMERA_HOME,
            tilt: Vec2::ZERO,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    /// Advance one frame of `dt_sec` toward the pose and pointer targets.
    pub fn step(
        &mut self,
        pose: &CameraPose,
        pointer: Vec2,
        camera_factor: f32,
        tilt_factor: f32,
        dt_sec: f32,
    ) {
        let a = frame_alpha(camera_factor, dt_sec);
        self.eye = approach_vec3(self.eye, target_eye(pose), a);
        let tilt_target = pointer_tilt_target(pointer);
        let at = frame_alpha(tilt_factor, dt_sec);
        self.tilt = Vec2::new(
            approach(self.tilt.x, tilt_target.x, at),
            approach(self.tilt.y, tilt_target.y, at),
        );
    }

    pub fn camera(&self, pose: &CameraPose, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: pose.target,
            up: Vec3::Y,
            tilt: self.tilt,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}
