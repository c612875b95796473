pub mod lighting;
pub mod lines;
pub mod picking;
pub mod render;
pub mod rng;
pub mod starfield;
