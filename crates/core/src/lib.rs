pub mod board;
pub mod config;
pub mod content;
pub mod item;
pub mod mapgen;
pub mod state;
pub mod traversal;
pub mod types;

pub use board::{Board, Tile};
pub use config::{GenerationConfig, TraversalConfig};
pub use content::{SEARCH_COST, fatigue_cost, visual_tag};
pub use item::ResourceItem;
pub use mapgen::{MIN_BOARD_SIZE, MapGenerator, derive_run_seed, generate_with_rng};
pub use traversal::Traversal;
pub use types::*;
