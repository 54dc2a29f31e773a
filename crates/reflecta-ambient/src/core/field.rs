use glam::Vec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::Viewport;
use crate::components::particle::{wrap, Particle};
use crate::core::rng::Rng;
use crate::renderer::palette::PARTICLE_COLORS;

/// The fixed set of particles for one canvas lifetime.
///
/// The count is derived once from the initial viewport width; resizes only
/// change the bounds particles wrap within.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Spawn `config.particle_count(viewport.width)` particles uniformly over the viewport.
    pub fn spawn(config: &BackgroundConfig, viewport: Viewport, rng: &mut Rng) -> Self {
        let bounds = viewport.size();
        let count = config.particle_count(bounds.x);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let position = wrap(Vec2::new(rng.next_f32() * bounds.x, rng.next_f32() * bounds.y), bounds);
            let velocity = Vec2::new(
                rng.range(-config.initial_speed, config.initial_speed),
                rng.range(-config.initial_speed, config.initial_speed),
            );
            let radius = rng.range(config.radius_range.0, config.radius_range.1);
            let opacity = rng.range(config.opacity_range.0, config.opacity_range.1);
            let palette_index = rng.next_int(PARTICLE_COLORS as u32) as u8;
            particles.push(Particle::new(position, velocity, radius, opacity, palette_index));
        }
        Self { particles, bounds }
    }

    /// Build a field from explicit particles (tests, replays).
    pub fn from_particles(particles: Vec<Particle>, viewport: Viewport) -> Self {
        Self {
            particles,
            bounds: viewport.size(),
        }
    }

    /// Advance every particle one frame against the current pointer.
    pub fn step(&mut self, pointer: Vec2, config: &BackgroundConfig) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(pointer, bounds, config);
        }
    }

    /// Adopt new bounds and wrap existing positions into them. The count is
    /// kept as spawned.
    pub fn resize(&mut self, viewport: Viewport) {
        self.bounds = viewport.size();
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.position = wrap(particle.position, bounds);
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
