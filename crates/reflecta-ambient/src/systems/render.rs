use crate::api::config::BackgroundConfig;
use crate::api::types::Theme;
use crate::components::particle::Particle;
use crate::core::field::ParticleField;
use crate::renderer::palette::ThemePalette;
use crate::renderer::traits::DrawSurface;
use crate::systems::aurora::draw_aurora;
use crate::systems::links::draw_links;

/// Paint one frame: clear, aurora, particles, then links on top.
pub fn draw_frame<S: DrawSurface>(
    surface: &mut S,
    field: &ParticleField,
    time: f64,
    theme: Theme,
    config: &BackgroundConfig,
) {
    let size = field.bounds();
    surface.clear(size);
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    let palette = ThemePalette::for_theme(theme);
    draw_aurora(surface, time, size, palette);
    draw_particles(surface, field.particles(), time, palette, config);
    draw_links(surface, field.particles(), palette, config);
}

/// Fill each particle in its palette colour at its current twinkle alpha.
pub fn draw_particles<S: DrawSurface>(
    surface: &mut S,
    particles: &[Particle],
    time: f64,
    palette: &ThemePalette,
    config: &BackgroundConfig,
) {
    for particle in particles {
        let color = palette
            .particle(particle.palette_index())
            .with_alpha(particle.twinkle_alpha(time, config));
        surface.fill_circle(particle.position, particle.radius(), color);
    }
}
