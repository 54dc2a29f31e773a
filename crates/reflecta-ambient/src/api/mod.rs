pub mod background;
pub mod config;
pub mod host;
pub mod types;
