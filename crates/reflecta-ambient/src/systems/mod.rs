pub mod aurora;
pub mod links;
pub mod render;
