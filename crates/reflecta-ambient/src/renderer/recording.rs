//! In-memory `DrawSurface` that records every call.
//!
//! Used for headless rendering (snapshotting a frame without a browser) and
//! as the call-count mock in lifecycle tests.

use glam::Vec2;

use super::color::Rgba;
use super::traits::{ColorStop, DrawSurface, RadialGradient};
use crate::api::types::Viewport;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Viewport),
    Clear { size: Vec2 },
    Gradient {
        inner_center: Vec2,
        inner_radius: f32,
        outer_center: Vec2,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

impl DrawCommand {
    /// Whether this command paints pixels (everything but `Resize`).
    pub fn is_draw(&self) -> bool {
        !matches!(self, DrawCommand::Resize(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    viewport: Viewport,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Last size passed to `resize`.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of pixel-painting calls.
    pub fn draw_calls(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn gradients(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Gradient { .. }))
    }

    pub fn clears(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Clear { .. })).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.push(DrawCommand::Resize(viewport));
    }

    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient<'_>, _size: Vec2) {
        self.commands.push(DrawCommand::Gradient {
            inner_center: gradient.inner_center,
            inner_radius: gradient.inner_radius,
            outer_center: gradient.outer_center,
            outer_radius: gradient.outer_radius,
            stops: gradient.stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}
