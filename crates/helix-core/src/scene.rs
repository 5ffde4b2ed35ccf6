//! Per-frame pipeline: scroll sample -> mappings -> helix layout -> selection.
//!
//! [`Scene`] is the context object the front-end owns. Scroll and pointer
//! notifications land in [`Scene::on_scroll`] / [`Scene::on_pointer`]; the
//! animation loop calls [`Scene::tick`] once per display frame and then reads
//! [`Scene::frame`].

use crate::camera::{Camera, CameraRig};
use crate::cards::CardVisual;
use crate::catalog::{Catalog, CatalogEntry};
use crate::constants::{CARD_PICK_RADIUS, PARTICLE_COUNT, PARTICLE_SEED};
use crate::helix::{layout_into, CardTransform, DepthWeights, HelixParams};
use crate::mapping::ScrollMapping;
use crate::particles::ParticleField;
use crate::picking::{ndc_ray, pick_nearest};
use crate::progress::{progress_for_index, ScrollTracker};
use crate::selection::ActiveResolver;
use crate::skeleton::{SkeletonPose, SkeletonSpin};
use crate::smoothing::SmoothingParams;
use crate::state::{CameraPose, SceneSnapshot, SceneState};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub helix: HelixParams,
    pub weights: DepthWeights,
    pub smoothing: SmoothingParams,
    /// Score band for keeping the current active card; 0 disables it.
    pub hysteresis: f32,
    pub pick_radius: f32,
    pub particle_count: usize,
    pub particle_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            helix: HelixParams::default(),
            weights: DepthWeights::default(),
            smoothing: SmoothingParams::default(),
            hysteresis: 0.0,
            pick_radius: CARD_PICK_RADIUS,
            particle_count: PARTICLE_COUNT,
            particle_seed: PARTICLE_SEED,
        }
    }
}

/// Everything a presentation layer needs for one frame.
pub struct SceneFrame<'a> {
    pub camera: Camera,
    pub pose: CameraPose,
    pub progress: f32,
    pub active_index: Option<usize>,
    pub active_id: Option<&'a str>,
    pub entries: &'a [CatalogEntry],
    pub cards: &'a [CardTransform],
    pub visuals: &'a [CardVisual],
    pub skeleton: SkeletonPose,
    pub particles: &'a [Vec3],
}

pub struct Scene {
    catalog: Catalog,
    config: SceneConfig,
    tracker: ScrollTracker,
    state: SceneState,
    resolver: ActiveResolver,
    rig: CameraRig,
    skeleton: SkeletonSpin,
    transforms: Vec<CardTransform>,
    visuals: Vec<CardVisual>,
    particles: ParticleField,
    hovered: Option<usize>,
    aspect: f32,
}

impl Scene {
    pub fn new(catalog: Catalog, config: SceneConfig) -> Self {
        if catalog.is_empty() {
            log::debug!("[scene] empty catalog, no card will ever be active");
        }
        let n = catalog.len();
        let mut scene = Self {
            resolver: ActiveResolver::new(config.hysteresis),
            particles: ParticleField::new(config.particle_count, config.particle_seed),
            visuals: vec![CardVisual::default(); n],
            transforms: Vec::with_capacity(n),
            catalog,
            config,
            tracker: ScrollTracker::new(),
            state: SceneState::new(),
            rig: CameraRig::new(),
            skeleton: SkeletonSpin::new(),
            hovered: None,
            aspect: 1.0,
        };
        scene.relayout();
        scene
    }

    /// Scroll notification: update progress and everything derived from it.
    pub fn on_scroll(&mut self, offset: f64, max_offset: f64) -> f32 {
        let progress = self.tracker.sample(offset, max_offset);
        self.state.set_progress(progress);
        let mapping = ScrollMapping::from_progress(progress, self.catalog.len());
        self.state.apply_mapping(&mapping);
        progress
    }

    /// Pointer position normalised to \[-1, 1\] with y pointing down.
    pub fn on_pointer(&mut self, x: f32, y: f32) {
        self.state.set_pointer(x, y);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Advance one display frame. Returns true when the active item changed.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let changed = self.relayout();

        let pose = *self.state.camera();
        let pointer = self.state.pointer();
        let s = self.config.smoothing;
        self.rig.step(&pose, pointer, s.camera, s.tilt, dt_sec);
        self.skeleton
            .step(self.state.skeleton_target(), s.skeleton, dt_sec);

        self.hovered = self.pick_card(pointer);
        let active = self.state.active_index();
        for (i, visual) in self.visuals.iter_mut().enumerate() {
            let is_active = active == Some(i);
            visual.step(is_active, self.hovered == Some(i), pointer, s.card, dt_sec);
        }
        self.particles.step(dt_sec);
        changed
    }

    /// Recompute every card transform from the current progress and re-run selection.
    fn relayout(&mut self) -> bool {
        let c = &self.config;
        layout_into(
            &mut self.transforms,
            self.catalog.len(),
            self.state.progress(),
            &c.helix,
            &c.weights,
        );
        let index = self.resolver.resolve(&self.transforms);
        let id = index.and_then(|i| self.catalog.get(i)).map(|e| e.id.as_str());
        self.state.set_active(index, id)
    }

    fn pick_card(&self, pointer: Vec2) -> Option<usize> {
        if self.transforms.is_empty() {
            return None;
        }
        let camera = self.camera();
        // pointer y grows downward, NDC y grows upward
        let (ro, rd) = ndc_ray(&camera, Vec2::new(pointer.x, -pointer.y));
        let centers = self
            .transforms
            .iter()
            .zip(&self.visuals)
            .map(|(t, v)| t.position + Vec3::Z * v.forward_offset);
        pick_nearest(ro, rd, centers, self.config.pick_radius).map(|(i, _)| i)
    }

    pub fn camera(&self) -> Camera {
        self.rig.camera(self.state.camera(), self.aspect)
    }

    /// Progress at the centre of the section `step` items away from the current one.
    pub fn neighbor_progress(&self, step: isize) -> Option<f32> {
        let n = self.catalog.len();
        let current = self.state.section_index()?;
        let next = (current as isize + step).clamp(0, n as isize - 1) as usize;
        progress_for_index(next, n)
    }

    pub fn frame(&self) -> SceneFrame<'_> {
        SceneFrame {
            camera: self.camera(),
            pose: *self.state.camera(),
            progress: self.state.progress(),
            active_index: self.state.active_index(),
            active_id: self.state.active_id(),
            entries: self.catalog.entries(),
            cards: &self.transforms,
            visuals: &self.visuals,
            skeleton: self.skeleton.pose(),
            particles: self.particles.positions(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    #[inline]
    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn skeleton(&self) -> &SkeletonSpin {
        &self.skeleton
    }

    #[inline]
    pub fn transforms(&self) -> &[CardTransform] {
        &self.transforms
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.state.snapshot()
    }
}
