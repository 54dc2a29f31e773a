pub mod color;
pub mod palette;
pub mod recording;
pub mod traits;
