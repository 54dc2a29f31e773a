use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for the ambient background. Every field has a default, so a
/// JSON config only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Upper bound on the particle count (default: 80).
    pub max_particles: usize,
    /// Viewport width per particle when deriving the count (default: 20).
    pub particle_spacing: f32,
    /// Bound on each initial velocity component, units/frame (default: 0.15).
    pub initial_speed: f32,
    /// Half-open particle radius range (default: [0.5, 2.5)).
    pub radius_range: (f32, f32),
    /// Half-open base opacity range (default: [0.1, 0.6)).
    pub opacity_range: (f32, f32),
    /// Pointer distance below which particles are pushed away (default: 150).
    pub repulsion_radius: f32,
    /// Peak repulsion impulse per frame, reached as distance → 0 (default: 0.02).
    pub repulsion_strength: f32,
    /// Per-frame velocity multiplier (default: 0.999).
    pub damping: f32,
    /// Distance below which two particles are joined by a line (default: 120).
    pub link_distance: f32,
    /// Stroke width of link lines (default: 0.5).
    pub link_width: f32,
    /// Virtual time added per frame (default: 16).
    pub time_step: f64,
    /// Twinkle phase rate per unit of virtual time (default: 0.002).
    pub twinkle_rate: f32,
    /// Twinkle phase offset per unit of x position (default: 0.01).
    pub twinkle_spread: f32,
    /// Opacity of the whole overlay so foreground content stays legible (default: 0.7).
    pub overlay_opacity: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            particle_spacing: 20.0,
            initial_speed: 0.15,
            radius_range: (0.5, 2.5),
            opacity_range: (0.1, 0.6),
            repulsion_radius: 150.0,
            repulsion_strength: 0.02,
            damping: 0.999,
            link_distance: 120.0,
            link_width: 0.5,
            time_step: 16.0,
            twinkle_rate: 0.002,
            twinkle_spread: 0.01,
            overlay_opacity: 0.7,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must satisfy low < high, got [{low}, {high})")]
    EmptyRange { field: &'static str, low: f32, high: f32 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfBounds { field: &'static str, value: f32, min: f32, max: f32 },
}

impl BackgroundConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("particle_spacing", self.particle_spacing as f64)?;
        positive("repulsion_radius", self.repulsion_radius as f64)?;
        positive("link_distance", self.link_distance as f64)?;
        positive("time_step", self.time_step)?;
        if !(self.initial_speed >= 0.0 && self.initial_speed.is_finite()) {
            return Err(ConfigError::OutOfBounds {
                field: "initial_speed",
                value: self.initial_speed,
                min: 0.0,
                max: f32::MAX,
            });
        }
        if !(self.repulsion_strength >= 0.0 && self.repulsion_strength.is_finite()) {
            return Err(ConfigError::OutOfBounds {
                field: "repulsion_strength",
                value: self.repulsion_strength,
                min: 0.0,
                max: f32::MAX,
            });
        }
        range("radius_range", self.radius_range)?;
        range("opacity_range", self.opacity_range)?;
        if self.radius_range.0 < 0.0 {
            return Err(ConfigError::OutOfBounds {
                field: "radius_range",
                value: self.radius_range.0,
                min: 0.0,
                max: f32::MAX,
            });
        }
        bounded("opacity_range", self.opacity_range.0, 0.0, 1.0)?;
        bounded("opacity_range", self.opacity_range.1, 0.0, 1.0)?;
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::OutOfBounds {
                field: "damping",
                value: self.damping,
                min: 0.0,
                max: 1.0,
            });
        }
        bounded("overlay_opacity", self.overlay_opacity, 0.0, 1.0)?;
        Ok(())
    }

    /// Particle count for a viewport width: `min(max_particles, floor(width / spacing))`.
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return 0;
        }
        let slots = (viewport_width / self.particle_spacing).floor() as usize;
        slots.min(self.max_particles)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn range(field: &'static str, (low, high): (f32, f32)) -> Result<(), ConfigError> {
    if low < high && low.is_finite() && high.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { field, low, high })
    }
}

fn bounded(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfBounds { field, value, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(BackgroundConfig::default().validate().is_ok());
    }

    #[test]
    fn particle_count_examples() {
        let config = BackgroundConfig::default();
        assert_eq!(config.particle_count(1600.0), 80);
        assert_eq!(config.particle_count(800.0), 40);
        assert_eq!(config.particle_count(300.0), 15);
        assert_eq!(config.particle_count(2560.0), 80);
        assert_eq!(config.particle_count(19.0), 0);
    }

    #[test]
    fn particle_count_degenerate_width() {
        let config = BackgroundConfig::default();
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(-400.0), 0);
        assert_eq!(config.particle_count(f32::NAN), 0);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let config = BackgroundConfig::from_json(r#"{ "max_particles": 40, "damping": 0.99 }"#).unwrap();
        assert_eq!(config.max_particles, 40);
        assert_eq!(config.damping, 0.99);
        assert_eq!(config.link_distance, 120.0);
    }

    #[test]
    fn from_json_rejects_bad_json() {
        let err = BackgroundConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_empty_radius_range() {
        let err = BackgroundConfig::from_json(r#"{ "radius_range": [2.0, 2.0] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { field: "radius_range", .. }));
    }

    #[test]
    fn rejects_damping_above_one() {
        let config = BackgroundConfig {
            damping: 1.01,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfBounds { field: "damping", .. })
        ));
    }

    #[test]
    fn rejects_zero_spacing() {
        let config = BackgroundConfig {
            particle_spacing: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "particle_spacing", .. })
        ));
    }

    #[test]
    fn rejects_opacity_above_one() {
        let config = BackgroundConfig {
            opacity_range: (0.5, 1.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
