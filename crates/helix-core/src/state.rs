//! Scene state shared between the pipeline stages and presentation layers.
//!
//! Each stage owns a disjoint set of fields: the tracker writes progress, the
//! mapping step writes the camera pose, skeleton target and section index, the
//! resolver writes the active item, and the pointer listener writes pointer
//! coordinates. Presentation layers read [`SceneSnapshot`] copies and never
//! write back.

use crate::constants::CAMERA_DEFAULT_DISTANCE;
use crate::mapping::ScrollMapping;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub orbit_angle: f32,
    pub distance: f32,
    /// Look-at point; the skeleton sits at the origin.
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            orbit_angle: 0.0,
            distance: CAMERA_DEFAULT_DISTANCE,
            target: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneSnapshot {
    pub progress: f32,
    pub active_index: Option<usize>,
    pub active_id: Option<String>,
    pub section_index: Option<usize>,
    pub camera: CameraPose,
    pub skeleton_target: f32,
    pub pointer: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct SceneState {
    progress: f32,
    active_index: Option<usize>,
    active_id: Option<String>,
    section_index: Option<usize>,
    camera: CameraPose,
    skeleton_target: f32,
    pointer: Vec2,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- tracker ----
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    // ---- mapping ----
    pub fn apply_mapping(&mut self, m: &ScrollMapping) {
        self.camera.orbit_angle = m.orbit_angle;
        self.camera.distance = m.camera_distance;
        self.skeleton_target = m.skeleton_offset;
        self.section_index = m.section_index;
    }

    // ---- resolver ----
    /// Record the active item. Returns true when the id changed.
    pub fn set_active(&mut self, index: Option<usize>, id: Option<&str>) -> bool {
        self.active_index = index;
        if self.active_id.as_deref() == id {
            return false;
        }
        self.active_id = id.map(str::to_owned);
        true
    }

    // ---- pointer ----
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        let c = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.pointer = Vec2::new(c(x), c(y));
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    #[inline]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    #[inline]
    pub fn section_index(&self) -> Option<usize> {
        self.section_index
    }

    #[inline]
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }

    #[inline]
    pub fn skeleton_target(&self) -> f32 {
        self.skeleton_target
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            progress: self.progress,
            active_index: self.active_index,
            active_id: self.active_id.clone(),
            section_index: self.section_index,
            camera: self.camera,
            skeleton_target: self.skeleton_target,
            pointer: self.pointer,
        }
    }
}
