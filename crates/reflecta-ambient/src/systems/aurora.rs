//! Aurora backdrop: three soft radial blobs drifting on independent waves.

use glam::Vec2;

use crate::renderer::palette::{ThemePalette, AURORA_BLOBS};
use crate::renderer::traits::{ColorStop, DrawSurface, RadialGradient};

/// Waveform of an oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sin,
    Cos,
}

/// `amplitude * wave(time * frequency)`, amplitude as a fraction of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub wave: Wave,
    pub frequency: f64,
    pub amplitude: f32,
}

impl Oscillator {
    pub const fn new(wave: Wave, frequency: f64, amplitude: f32) -> Self {
        Self { wave, frequency, amplitude }
    }

    /// Offset in viewport fractions at virtual time `time`.
    pub fn sample(&self, time: f64) -> f32 {
        let phase = time * self.frequency;
        let v = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        v as f32 * self.amplitude
    }
}

/// One aurora blob. Geometry is theme-independent; tints come from the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuroraBlob {
    /// Resting centre as a fraction of the viewport.
    pub anchor: Vec2,
    pub sway_x: Oscillator,
    pub sway_y: Oscillator,
    /// Outer radius as a fraction of viewport width.
    pub reach: f32,
}

pub const BLOBS: [AuroraBlob; AURORA_BLOBS] = [
    AuroraBlob {
        anchor: Vec2::new(0.3, 0.2),
        sway_x: Oscillator::new(Wave::Sin, 0.0003, 0.15),
        sway_y: Oscillator::new(Wave::Cos, 0.0004, 0.1),
        reach: 0.5,
    },
    AuroraBlob {
        anchor: Vec2::new(0.7, 0.6),
        sway_x: Oscillator::new(Wave::Cos, 0.0005, 0.12),
        sway_y: Oscillator::new(Wave::Sin, 0.0003, 0.15),
        reach: 0.45,
    },
    // Teal accent along the bottom.
    AuroraBlob {
        anchor: Vec2::new(0.5, 0.8),
        sway_x: Oscillator::new(Wave::Sin, 0.0002, 0.2),
        sway_y: Oscillator::new(Wave::Cos, 0.0006, 0.1),
        reach: 0.3,
    },
];

impl AuroraBlob {
    /// Gradient for this blob at `time` over a `size` viewport.
    ///
    /// The bright inner point sways; the outer circle stays on the anchor,
    /// which skews the glow as the blob moves.
    pub fn gradient<'a>(&self, time: f64, size: Vec2, stops: &'a [ColorStop]) -> RadialGradient<'a> {
        let anchor = self.anchor * size;
        let sway = Vec2::new(self.sway_x.sample(time) * size.x, self.sway_y.sample(time) * size.y);
        RadialGradient {
            inner_center: anchor + sway,
            inner_radius: 0.0,
            outer_center: anchor,
            outer_radius: size.x * self.reach,
            stops,
        }
    }
}

/// Paint all three blobs over the full surface.
pub fn draw_aurora<S: DrawSurface>(surface: &mut S, time: f64, size: Vec2, palette: &ThemePalette) {
    for (blob, stops) in BLOBS.iter().zip(palette.aurora) {
        surface.fill_radial_gradient(&blob.gradient(time, size, stops), size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette::{DARK, LIGHT};
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    const SIZE: Vec2 = Vec2::new(1000.0, 800.0);

    #[test]
    fn rest_position_at_time_zero() {
        let g = BLOBS[0].gradient(0.0, SIZE, DARK.aurora[0]);
        // sin(0) = 0, cos(0) = 1
        assert!((g.inner_center.x - 300.0).abs() < 1e-3);
        assert!((g.inner_center.y - (160.0 + 80.0)).abs() < 1e-3);
        assert!(g.outer_center.abs_diff_eq(Vec2::new(300.0, 160.0), 1e-3));
        assert_eq!(g.outer_radius, 500.0);
        assert_eq!(g.inner_radius, 0.0);
    }

    #[test]
    fn sway_bounded_by_amplitude() {
        for blob in &BLOBS {
            for frame in 0..5000 {
                let t = frame as f64 * 16.0;
                let g = blob.gradient(t, SIZE, &[]);
                let offset = g.inner_center - g.outer_center;
                assert!(offset.x.abs() <= blob.sway_x.amplitude * SIZE.x + 1e-3);
                assert!(offset.y.abs() <= blob.sway_y.amplitude * SIZE.y + 1e-3);
            }
        }
    }

    #[test]
    fn blobs_move_independently() {
        let t = 5000.0;
        let offsets: Vec<Vec2> = BLOBS
            .iter()
            .map(|b| {
                let g = b.gradient(t, Vec2::ONE, &[]);
                (g.inner_center - g.outer_center) / Vec2::new(b.sway_x.amplitude, b.sway_y.amplitude)
            })
            .collect();
        assert_ne!(offsets[0], offsets[1]);
        assert_ne!(offsets[1], offsets[2]);
        assert_ne!(offsets[0], offsets[2]);
    }

    #[test]
    fn draws_three_gradients_with_theme_stops() {
        let mut surface = RecordingSurface::new();
        draw_aurora(&mut surface, 160.0, SIZE, &LIGHT);
        let stops: Vec<Vec<ColorStop>> = surface
            .gradients()
            .map(|c| match c {
                DrawCommand::Gradient { stops, .. } => stops.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(stops.len(), 3);
        for (recorded, expected) in stops.iter().zip(LIGHT.aurora) {
            assert_eq!(recorded.as_slice(), expected);
        }
    }
}
