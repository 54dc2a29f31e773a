//! Proximity lines between nearby particles.
//!
//! Plain O(n²) over unordered pairs; the particle count is capped low
//! enough (80 → 3160 pairs) that a spatial index would not pay for itself.

use crate::api::config::BackgroundConfig;
use crate::components::particle::Particle;
use crate::renderer::palette::ThemePalette;
use crate::renderer::traits::DrawSurface;

/// A pair of particles close enough to be joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

/// `(1 - distance / max_distance) * scale` below `max_distance`, zero from there on.
pub fn link_alpha(distance: f32, max_distance: f32, scale: f32) -> f32 {
    if distance < max_distance {
        (1.0 - distance / max_distance) * scale
    } else {
        0.0
    }
}

/// All unordered pairs `(a < b)` closer than `max_distance`.
pub fn links(particles: &[Particle], max_distance: f32) -> impl Iterator<Item = Link> + '_ {
    let n = particles.len();
    (0..n).flat_map(move |a| {
        (a + 1..n).filter_map(move |b| {
            let distance = particles[a].position.distance(particles[b].position);
            (distance < max_distance).then_some(Link { a, b, distance })
        })
    })
}

/// Stroke every link with its distance-faded alpha.
pub fn draw_links<S: DrawSurface>(
    surface: &mut S,
    particles: &[Particle],
    palette: &ThemePalette,
    config: &BackgroundConfig,
) {
    for link in links(particles, config.link_distance) {
        let alpha = link_alpha(link.distance, config.link_distance, palette.link_alpha_scale);
        surface.stroke_line(
            particles[link.a].position,
            particles[link.b].position,
            config.link_width,
            palette.link.with_alpha(alpha),
        );
    }
}
