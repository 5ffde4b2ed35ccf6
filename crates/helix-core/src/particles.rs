//! Decorative particle drift around the scene.

use crate::constants::{PARTICLE_BOUND, PARTICLE_MAX_SPEED, PARTICLE_SPEED_SCALE};
use glam::Vec3;
use rand::prelude::*;

pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    bound: f32,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bound = PARTICLE_BOUND;
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-bound..=bound),
                rng.gen_range(-bound..=bound),
                rng.gen_range(-bound..=bound),
            ));
            velocities.push(Vec3::new(
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            ));
        }
        Self {
            positions,
            velocities,
            bound,
        }
    }

    /// Drift every particle; a velocity component flips once its coordinate leaves the box.
    pub fn step(&mut self, dt_sec: f32) {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        let k = dt_sec * PARTICLE_SPEED_SCALE;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v * k;
            for axis in 0..3 {
                if p[axis].abs() > self.bound {
                    v[axis] = -v[axis];
                }
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Positions as a flat `[x, y, z, x, y, z, ...]` list.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }
}
