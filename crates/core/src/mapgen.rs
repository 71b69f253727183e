//! Procedural board generation: route carving followed by terrain population.

mod generator;
mod route;
mod seed;
mod terrain;

pub use generator::{MIN_BOARD_SIZE, MapGenerator, generate_with_rng};
pub use seed::derive_run_seed;
