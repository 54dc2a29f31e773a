//! Ambient particle: drift, pointer repulsion, damping, twinkle.

use glam::Vec2;

use crate::api::config::BackgroundConfig;

/// A single drifting point in the ambient field.
///
/// Radius, base opacity and palette slot are fixed at creation. The palette
/// slot is resolved against the active theme at draw time, so a theme
/// switch re-colours without touching simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    radius: f32,
    opacity: f32,
    palette_index: u8,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32, palette_index: u8) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
            palette_index,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Base opacity before the twinkle multiplier.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Index into the theme's particle palette.
    pub fn palette_index(&self) -> usize {
        self.palette_index as usize
    }

    /// Advance one frame: repel from the pointer, move, damp, wrap into `bounds`.
    pub fn step(&mut self, pointer: Vec2, bounds: Vec2, config: &BackgroundConfig) {
        let offset = self.position - pointer;
        let distance = offset.length();
        let force = repulsion_magnitude(distance, config.repulsion_radius, config.repulsion_strength);
        if force > 0.0 {
            self.velocity += offset / distance * force;
        }

        self.position += self.velocity;
        self.velocity *= config.damping;

        if !self.velocity.is_finite() {
            self.velocity = Vec2::ZERO;
        }
        self.position = wrap(self.position, bounds);
    }

    /// Draw alpha at virtual time `time`: base opacity scaled into [0, opacity].
    pub fn twinkle_alpha(&self, time: f64, config: &BackgroundConfig) -> f32 {
        self.opacity * twinkle_factor(time, self.position.x, config)
    }
}

/// Repulsion impulse for a particle `distance` away from the pointer.
///
/// Zero at or beyond `radius`, rising linearly to `strength` as the distance
/// approaches zero. A particle exactly under the pointer has no direction to
/// be pushed in and gets no force.
pub fn repulsion_magnitude(distance: f32, radius: f32, strength: f32) -> f32 {
    if distance > 0.0 && distance < radius {
        (radius - distance) / radius * strength
    } else {
        0.0
    }
}

/// `0.5 + 0.5 * sin(time * rate + x * spread)`, clamped to [0, 1].
pub fn twinkle_factor(time: f64, x: f32, config: &BackgroundConfig) -> f32 {
    let phase = time * config.twinkle_rate as f64 + x as f64 * config.twinkle_spread as f64;
    let factor = 0.5 + 0.5 * phase.sin() as f32;
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

/// Wrap a coordinate into `[0, extent)`. Degenerate extents pin to 0.
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0 && extent.is_finite()) || !value.is_finite() {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to exactly `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Wrap a position into `[0, bounds.x) × [0, bounds.y)`.
pub fn wrap(position: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(position.x, bounds.x), wrap_coord(position.y, bounds.y))
}
