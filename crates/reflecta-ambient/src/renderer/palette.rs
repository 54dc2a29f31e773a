//! Theme-keyed colour tables.
//!
//! Particles store only a slot index; these tables turn it into a colour at
//! draw time.

use super::color::Rgba;
use super::traits::ColorStop;
use crate::api::types::Theme;

/// Number of particle colour slots in every palette.
pub const PARTICLE_COLORS: usize = 5;

/// Number of aurora blobs every palette tints.
pub const AURORA_BLOBS: usize = 3;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Particle slots. Alpha is replaced by the twinkle alpha when drawn.
    pub particles: [Rgba; PARTICLE_COLORS],
    /// Gradient stops per aurora blob, centre (0.0) to edge (1.0).
    pub aurora: [&'static [ColorStop]; AURORA_BLOBS],
    /// Link line colour. Alpha is replaced per line.
    pub link: Rgba,
    /// Peak link alpha, reached when two particles coincide.
    pub link_alpha_scale: f32,
}

const fn stop(offset: f32, r: u8, g: u8, b: u8, a: f32) -> ColorStop {
    ColorStop {
        offset,
        color: Rgba::new(r, g, b, a),
    }
}

const EDGE: ColorStop = ColorStop {
    offset: 1.0,
    color: Rgba::TRANSPARENT,
};

const DARK_AURORA_1: [ColorStop; 3] = [stop(0.0, 59, 130, 246, 0.06), stop(0.5, 139, 92, 246, 0.03), EDGE];
const DARK_AURORA_2: [ColorStop; 3] = [stop(0.0, 139, 92, 246, 0.05), stop(0.5, 59, 130, 246, 0.02), EDGE];
const DARK_AURORA_3: [ColorStop; 2] = [stop(0.0, 52, 211, 153, 0.03), EDGE];

const LIGHT_AURORA_1: [ColorStop; 3] = [stop(0.0, 59, 130, 246, 0.035), stop(0.5, 139, 92, 246, 0.018), EDGE];
const LIGHT_AURORA_2: [ColorStop; 3] = [stop(0.0, 139, 92, 246, 0.03), stop(0.5, 59, 130, 246, 0.012), EDGE];
const LIGHT_AURORA_3: [ColorStop; 2] = [stop(0.0, 99, 102, 241, 0.02), EDGE];

pub const DARK: ThemePalette = ThemePalette {
    particles: [
        Rgba::new(59, 130, 246, 0.4),  // primary blue
        Rgba::new(139, 92, 246, 0.35), // accent violet
        Rgba::new(59, 130, 246, 0.2),
        Rgba::new(139, 92, 246, 0.15),
        Rgba::new(96, 165, 250, 0.25), // light blue
    ],
    aurora: [&DARK_AURORA_1, &DARK_AURORA_2, &DARK_AURORA_3],
    link: Rgba::new(139, 130, 246, 1.0),
    link_alpha_scale: 0.08,
};

pub const LIGHT: ThemePalette = ThemePalette {
    particles: [
        Rgba::new(37, 99, 235, 0.4),
        Rgba::new(124, 58, 237, 0.35),
        Rgba::new(29, 78, 216, 0.2),
        Rgba::new(109, 40, 217, 0.15),
        Rgba::new(79, 70, 229, 0.25),
    ],
    aurora: [&LIGHT_AURORA_1, &LIGHT_AURORA_2, &LIGHT_AURORA_3],
    link: Rgba::new(99, 102, 241, 1.0),
    link_alpha_scale: 0.06,
};

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> &'static ThemePalette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Colour for a particle slot. Out-of-range slots wrap.
    pub fn particle(&self, index: usize) -> Rgba {
        self.particles[index % PARTICLE_COLORS]
    }
}
