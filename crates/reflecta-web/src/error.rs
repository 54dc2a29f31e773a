use reflecta_ambient::ConfigError;
use thiserror::Error;

/// Why the background did not start. None of these are fatal to the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window (not running in a browser)")]
    NoWindow,
    #[error("no <canvas> element with id {0:?}")]
    CanvasNotFound(String),
    #[error("2D drawing context unavailable")]
    SurfaceUnavailable,
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
