//! Board generation orchestration that composes route carving and terrain population.

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::board::{Board, Tile};
use crate::config::GenerationConfig;
use crate::types::{MapGenError, TileKind};

use super::route::carve_route;
use super::terrain::populate_rest;

pub const MIN_BOARD_SIZE: usize = 2;

pub struct MapGenerator {
    seed: u64,
    config: GenerationConfig,
}

impl MapGenerator {
    pub fn new(seed: u64, config: GenerationConfig) -> Self {
        Self { seed, config }
    }

    pub fn generate(&self, size: usize) -> Result<Board, MapGenError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        generate_with_rng(size, &mut rng, &self.config)
    }
}

/// Generates a board from any random source. Route cells take priority; the
/// populator only fills the remaining coordinates.
pub fn generate_with_rng<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<Board, MapGenError> {
    if size < MIN_BOARD_SIZE {
        return Err(MapGenError::SizeTooSmall { size, min: MIN_BOARD_SIZE });
    }
    config.validate()?;

    let route = carve_route(size, rng);
    let mut cells = populate_rest(size, &route.tiles, rng, config);
    cells.extend(route.tiles.iter().map(|(&pos, &kind)| (pos, Tile::route(kind))));
    debug_assert_eq!(cells.len(), size * size);

    let trees = cells.values().filter(|tile| tile.kind == TileKind::Tree).count();
    let caches = cells.values().filter(|tile| tile.item.is_some()).count();
    debug!(
        "generated {size}x{size} board: route length {}, goal {}, {trees} trees, {caches} food caches",
        route.length, route.goal
    );

    Ok(Board::from_parts(size, cells.into_values().collect(), route.length, route.goal))
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::content::{
        GROUND_FOOD_VALUES, POISONED_TREE_FOOD_VALUES, TREE_FOOD_VALUES, fatigue_cost,
    };
    use crate::types::{ConfigError, Pos};

    #[test]
    fn sizes_below_two_are_rejected() {
        let generator = MapGenerator::new(1, GenerationConfig::default());
        assert_eq!(generator.generate(0), Err(MapGenError::SizeTooSmall { size: 0, min: 2 }));
        assert_eq!(generator.generate(1), Err(MapGenError::SizeTooSmall { size: 1, min: 2 }));
        assert!(generator.generate(2).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = GenerationConfig { tree_ratio: 2.0, ..GenerationConfig::default() };
        assert_eq!(
            MapGenerator::new(1, config).generate(10),
            Err(MapGenError::InvalidConfig(ConfigError::RatioOutOfRange {
                field: "tree_ratio",
                value: 2.0
            }))
        );
    }

    #[test]
    fn same_inputs_produce_byte_identical_boards() {
        let a = MapGenerator::new(123_456, GenerationConfig::default()).generate(15).expect("a");
        let b = MapGenerator::new(123_456, GenerationConfig::default()).generate(15).expect("b");
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    }

    #[test]
    fn different_seeds_produce_different_boards() {
        let hashes: BTreeSet<u64> = (0..16_u64)
            .map(|seed| {
                MapGenerator::new(seed, GenerationConfig::default())
                    .generate(15)
                    .expect("board")
                    .snapshot_hash()
            })
            .collect();
        assert!(hashes.len() > 12, "expected distinct boards, got {} unique", hashes.len());
    }

    #[test]
    fn exactly_one_goal_sits_at_the_recorded_coordinate() {
        for seed in 0..20 {
            let board = MapGenerator::new(seed, GenerationConfig::default()).generate(12).expect("board");
            let goals: Vec<Pos> = board
                .positions()
                .filter(|&pos| board.kind_at(pos) == Some(TileKind::Goal))
                .collect();
            assert_eq!(goals, vec![board.goal()], "seed {seed}");
            assert_eq!(board.tile(board.goal()).map(|tile| fatigue_cost(tile.kind)), Some(0));
        }
    }

    #[test]
    fn off_route_items_stay_within_documented_ranges() {
        for seed in 0..10 {
            let board = MapGenerator::new(seed, GenerationConfig::default()).generate(30).expect("board");
            for pos in board.positions() {
                let Some(tile) = board.tile(pos) else { continue };
                match (tile.kind, &tile.item) {
                    (TileKind::Tree, Some(item)) => assert!(
                        TREE_FOOD_VALUES.contains(&item.value)
                            || POISONED_TREE_FOOD_VALUES.contains(&item.value)
                    ),
                    (TileKind::Tree, None) => panic!("tree at {pos} without food"),
                    (TileKind::Ground, Some(item)) => {
                        assert!(GROUND_FOOD_VALUES.contains(&item.value))
                    }
                    (TileKind::Ground, None) => {}
                    (kind, item) => assert!(item.is_none(), "{kind:?} at {pos} carries food"),
                }
            }
        }
    }

    #[test]
    fn tree_poison_rate_matches_config_in_expectation() {
        let config = GenerationConfig { tree_ratio: 1.0, ..GenerationConfig::default() };
        let board = MapGenerator::new(2_024, config).generate(100).expect("board");
        let items: Vec<i32> = board
            .positions()
            .filter_map(|pos| board.tile(pos))
            .filter(|tile| tile.kind == TileKind::Tree)
            .filter_map(|tile| tile.item.as_ref().map(|item| item.value))
            .collect();
        let poisoned = items.iter().filter(|&&value| value < 0).count();
        let rate = poisoned as f64 / items.len() as f64;
        assert!(items.len() > 9_000);
        assert!(
            (rate - config.poisonous_tree_food_ratio).abs() < 0.02,
            "poison rate {rate:.4} strays from {}",
            config.poisonous_tree_food_ratio
        );
    }

    #[test]
    fn ground_food_rate_matches_config_in_expectation() {
        let config = GenerationConfig { tree_ratio: 0.0, ..GenerationConfig::default() };
        let board = MapGenerator::new(77, config).generate(100).expect("board");
        let ground: Vec<bool> = board
            .positions()
            .filter_map(|pos| board.tile(pos))
            .filter(|tile| tile.kind == TileKind::Ground)
            .map(|tile| tile.item.is_some())
            .collect();
        let rate = ground.iter().filter(|&&stocked| stocked).count() as f64 / ground.len() as f64;
        assert!((rate - config.ground_food_ratio).abs() < 0.03, "ground food rate {rate:.4}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_routes_are_connected_monotone_and_end_on_an_edge(
            seed in any::<u64>(),
            size in 2_usize..40
        ) {
            let board = MapGenerator::new(seed, GenerationConfig::default())
                .generate(size)
                .expect("valid size");
            let last = size as i32 - 1;
            let goal = board.goal();
            prop_assert!(goal.row == last || goal.col == last, "goal {goal} not on far edge");

            let route: BTreeSet<Pos> = board
                .positions()
                .filter(|&pos| board.kind_at(pos).is_some_and(TileKind::is_route))
                .collect();
            prop_assert_eq!(route.len() as u32, board.route_length() + 1);

            let walked = walk_route(&board);
            prop_assert_eq!(walked.last().copied(), Some(goal));
            prop_assert_eq!(walked.len(), route.len());
            prop_assert!(walked.windows(2).all(|pair| {
                let (a, b) = (pair[0], pair[1]);
                (b.row == a.row + 1 && b.col == a.col) || (b.row == a.row && b.col == a.col + 1)
            }), "walked route steps must be single down/right moves");
            for pos in &route {
                prop_assert!(board.tile(*pos).is_some_and(|tile| tile.item.is_none()));
            }
        }
    }

    /// Follows route tiles from the origin, only ever stepping down or right.
    fn walk_route(board: &Board) -> Vec<Pos> {
        let mut walked = vec![Pos::ORIGIN];
        let mut seen = BTreeSet::from([Pos::ORIGIN]);
        let mut open = VecDeque::from([Pos::ORIGIN]);
        while let Some(pos) = open.pop_front() {
            if pos == board.goal() {
                break;
            }
            for next in [Pos { row: pos.row + 1, col: pos.col }, Pos { row: pos.row, col: pos.col + 1 }] {
                if seen.contains(&next) || !board.kind_at(next).is_some_and(TileKind::is_route) {
                    continue;
                }
                seen.insert(next);
                walked.push(next);
                open.push_back(next);
            }
        }
        walked
    }
}
