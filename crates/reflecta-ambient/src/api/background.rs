use glam::Vec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::{Theme, Viewport};
use crate::components::particle::Particle;
use crate::core::field::ParticleField;
use crate::core::rng::Rng;
use crate::core::time::AnimationClock;
use crate::input::pointer::{InputEvent, PointerState};
use crate::renderer::traits::DrawSurface;
use crate::systems::render::draw_frame;

/// State of one ambient background instance.
///
/// Owns everything the animation reads and writes: particles, virtual clock,
/// pointer, theme and viewport. Nothing is global, so two instances never
/// share pointer or time state.
pub struct Background {
    config: BackgroundConfig,
    field: ParticleField,
    clock: AnimationClock,
    pointer: PointerState,
    theme: Theme,
    viewport: Viewport,
}

impl Background {
    /// Spawn a fresh field for `viewport`, seeded with `seed`.
    pub fn new(config: BackgroundConfig, viewport: Viewport, theme: Theme, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let field = ParticleField::spawn(&config, viewport, &mut rng);
        Self::with_field(config, field, viewport, theme)
    }

    /// Wrap an existing field (tests, replays).
    pub fn with_field(config: BackgroundConfig, field: ParticleField, viewport: Viewport, theme: Theme) -> Self {
        let clock = AnimationClock::new(config.time_step);
        Self {
            config,
            field,
            clock,
            pointer: PointerState::new(),
            theme,
            viewport,
        }
    }

    /// Apply a host event immediately.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer.move_to(x, y);
            }
            InputEvent::Resize { width, height } => self.resize(Viewport::new(width, height)),
            InputEvent::ThemeChanged(theme) => self.set_theme(theme),
        }
    }

    /// Adopt a new viewport. The particle count stays as spawned.
    ///
    /// An empty viewport (a minimised or hidden window) leaves the field
    /// alone, so it comes back unchanged with the next real size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !viewport.is_empty() {
            self.field.resize(viewport);
        }
    }

    /// Switch palettes. Particle positions and velocities are untouched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Advance the clock and step every particle. Particles hold still
    /// while the viewport is empty.
    pub fn tick(&mut self) {
        self.clock.advance();
        if !self.viewport.is_empty() {
            self.field.step(self.pointer.position(), &self.config);
        }
    }

    /// Paint the current state.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        if self.viewport.is_empty() {
            surface.clear(self.viewport.size());
            return;
        }
        draw_frame(surface, &self.field, self.clock.now(), self.theme, &self.config);
    }

    /// One animation frame: tick then draw.
    pub fn frame<S: DrawSurface>(&mut self, surface: &mut S) {
        self.tick();
        self.draw(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn time(&self) -> f64 {
        self.clock.now()
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
