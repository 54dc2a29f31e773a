//! Drawing contract between the simulation and the host canvas.
//!
//! The engine never touches a real canvas. It describes each frame as a
//! handful of primitive calls; the browser bridge maps them onto
//! `CanvasRenderingContext2d`, tests record them.

use glam::Vec2;

use super::color::Rgba;
use crate::api::types::Viewport;

/// One colour stop of a gradient, `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient, same parameters as canvas `createRadialGradient`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient<'a> {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: &'a [ColorStop],
}

/// A 2D surface the background paints onto.
pub trait DrawSurface {
    /// Match the surface's pixel size to the viewport.
    fn resize(&mut self, viewport: Viewport);

    /// Clear the rectangle `[0, size.x) × [0, size.y)` to transparent.
    fn clear(&mut self, size: Vec2);

    /// Fill the whole `size` rectangle with a radial gradient.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient<'_>, size: Vec2);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
