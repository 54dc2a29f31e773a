pub mod field;
pub mod rng;
pub mod time;
