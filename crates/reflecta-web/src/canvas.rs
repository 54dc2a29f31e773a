//! `DrawSurface` over a browser `<canvas>` 2D context.

use std::f64::consts::TAU;

use glam::Vec2;
use reflecta_ambient::{DrawSurface, RadialGradient, Rgba, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap `canvas`, or `None` when it has no 2D context.
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Pin the canvas behind page content: full viewport, click-through,
    /// dimmed so foreground text stays legible.
    pub fn apply_overlay_style(&self, opacity: f32) {
        let style = self.canvas.style();
        let opacity = opacity.to_string();
        for (property, value) in [
            ("position", "fixed"),
            ("inset", "0"),
            ("z-index", "0"),
            ("pointer-events", "none"),
            ("opacity", opacity.as_str()),
        ] {
            let _ = style.set_property(property, value);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        let size = viewport.size();
        self.canvas.set_width(size.x as u32);
        self.canvas.set_height(size.y as u32);
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient<'_>, size: Vec2) {
        let Ok(fill) = self.ctx.create_radial_gradient(
            gradient.inner_center.x as f64,
            gradient.inner_center.y as f64,
            gradient.inner_radius as f64,
            gradient.outer_center.x as f64,
            gradient.outer_center.y as f64,
            gradient.outer_radius as f64,
        ) else {
            return;
        };
        for stop in gradient.stops {
            let _ = fill.add_color_stop(stop.offset, &stop.color.to_css());
        }
        #[allow(deprecated)]
        self.ctx.set_fill_style(&fill);
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}
