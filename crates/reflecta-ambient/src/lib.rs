pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::background::Background;
pub use api::config::{BackgroundConfig, ConfigError};
pub use api::host::{Host, ListenerKind, ListenerId, FrameHandle};
pub use api::types::{Theme, ThemePreference, ParseThemeError, Viewport};
pub use components::particle::Particle;
pub use crate::core::field::ParticleField;
pub use crate::core::rng::Rng;
pub use crate::core::time::AnimationClock;
pub use input::pointer::{InputEvent, PointerState};
pub use renderer::color::Rgba;
pub use renderer::palette::ThemePalette;
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use renderer::traits::{ColorStop, DrawSurface, RadialGradient};
pub use systems::aurora::{AuroraBlob, Oscillator, Wave};
pub use systems::links::Link;
