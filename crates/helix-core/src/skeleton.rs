use crate::constants::{
    SKELETON_BOB_AMPLITUDE, SKELETON_BOB_FREQ, SKELETON_IDLE_RATE, SKELETON_PULSE_AMPLITUDE,
    SKELETON_PULSE_FREQ,
};
use crate::smoothing::{approach, frame_alpha};

/// Rotation of the central skeleton about its vertical axis.
///
/// Two accumulators: `idle` grows at a constant rate with real time, `scroll`
/// eases toward the scroll-derived offset. The reported angle is their sum, so
/// the idle spin never fights the scroll target.
#[derive(Clone, Debug, Default)]
pub struct SkeletonSpin {
    idle: f32,
    scroll: f32,
    elapsed: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkeletonPose {
    pub rotation: f32,
    /// Vertical breathing offset of the spine.
    pub bob: f32,
    /// Uniform scale pulse around 1.
    pub scale: f32,
}

impl SkeletonSpin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, scroll_target: f32, blend_factor: f32, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(dt);
        // wrapped to one turn
        self.idle = (self.idle + SKELETON_IDLE_RATE * dt).rem_euclid(std::f32::consts::TAU);
        self.scroll = approach(self.scroll, scroll_target, frame_alpha(blend_factor, dt));
    }

    #[inline]
    pub fn idle(&self) -> f32 {
        self.idle
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.idle + self.scroll
    }

    pub fn pose(&self) -> SkeletonPose {
        let t = self.elapsed as f32;
        SkeletonPose {
            rotation: self.rotation(),
            bob: (t * SKELETON_BOB_FREQ).sin() * SKELETON_BOB_AMPLITUDE,
            scale: 1.0 + (t * SKELETON_PULSE_FREQ).sin() * SKELETON_PULSE_AMPLITUDE,
        }
    }
}
