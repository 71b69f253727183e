//! Fills every off-route cell with ground or trees and scatters food.

use std::collections::BTreeMap;

use rand_chacha::rand_core::Rng;

use crate::board::Tile;
use crate::config::GenerationConfig;
use crate::content::{
    GROUND_FOOD_NAMES, GROUND_FOOD_VALUES, POISONED_TREE_FOOD_VALUES, TREE_FOOD_NAMES,
    TREE_FOOD_VALUES,
};
use crate::item::ResourceItem;
use crate::types::{Pos, TileKind};

use super::seed::{chance, choose, random_i32};

pub(super) fn populate_rest<R: Rng + ?Sized>(
    size: usize,
    route: &BTreeMap<Pos, TileKind>,
    rng: &mut R,
    config: &GenerationConfig,
) -> BTreeMap<Pos, Tile> {
    let mut cells = BTreeMap::new();
    for row in 0..size {
        for col in 0..size {
            let pos = Pos { row: row as i32, col: col as i32 };
            if route.contains_key(&pos) {
                continue;
            }
            cells.insert(pos, populate_tile(rng, config));
        }
    }
    cells
}

fn populate_tile<R: Rng + ?Sized>(rng: &mut R, config: &GenerationConfig) -> Tile {
    if chance(rng, config.tree_ratio) {
        Tile { kind: TileKind::Tree, item: Some(tree_food(rng, config)) }
    } else {
        Tile { kind: TileKind::Ground, item: ground_food(rng, config) }
    }
}

fn tree_food<R: Rng + ?Sized>(rng: &mut R, config: &GenerationConfig) -> ResourceItem {
    let values = if chance(rng, config.poisonous_tree_food_ratio) {
        POISONED_TREE_FOOD_VALUES
    } else {
        TREE_FOOD_VALUES
    };
    let value = random_i32(rng, *values.start(), *values.end());
    ResourceItem::new(choose(rng, &TREE_FOOD_NAMES), value)
}

fn ground_food<R: Rng + ?Sized>(rng: &mut R, config: &GenerationConfig) -> Option<ResourceItem> {
    if !chance(rng, config.ground_food_ratio) {
        return None;
    }
    let value = random_i32(rng, *GROUND_FOOD_VALUES.start(), *GROUND_FOOD_VALUES.end());
    Some(ResourceItem::new(choose(rng, &GROUND_FOOD_NAMES), value))
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    fn route_along_top_row(size: usize) -> BTreeMap<Pos, TileKind> {
        (0..size as i32).map(|col| (Pos { row: 0, col }, TileKind::RoadHorizontal)).collect()
    }

    #[test]
    fn populator_only_touches_the_complement_of_the_route() {
        let route = route_along_top_row(6);
        let cells = populate_rest(
            6,
            &route,
            &mut ChaCha8Rng::seed_from_u64(5),
            &GenerationConfig::default(),
        );
        assert_eq!(cells.len(), 30);
        assert!(cells.keys().all(|pos| !route.contains_key(pos)));
        assert!(cells.values().all(|tile| !tile.kind.is_route()));
    }

    #[test]
    fn trees_always_carry_food() {
        let config = GenerationConfig { tree_ratio: 1.0, ..GenerationConfig::default() };
        let cells =
            populate_rest(20, &BTreeMap::new(), &mut ChaCha8Rng::seed_from_u64(11), &config);
        for tile in cells.values() {
            assert_eq!(tile.kind, TileKind::Tree);
            let item = tile.item.as_ref().expect("tree without food");
            assert!(TREE_FOOD_NAMES.contains(&item.name));
            assert!(
                TREE_FOOD_VALUES.contains(&item.value)
                    || POISONED_TREE_FOOD_VALUES.contains(&item.value)
            );
        }
    }

    #[test]
    fn zero_ratios_leave_barren_ground() {
        let config = GenerationConfig {
            tree_ratio: 0.0,
            ground_food_ratio: 0.0,
            poisonous_tree_food_ratio: 0.0,
        };
        let cells =
            populate_rest(12, &BTreeMap::new(), &mut ChaCha8Rng::seed_from_u64(2), &config);
        assert!(cells.values().all(|tile| tile.kind == TileKind::Ground && tile.item.is_none()));
    }

    #[test]
    fn ground_food_stays_in_range() {
        let config = GenerationConfig { ground_food_ratio: 1.0, ..GenerationConfig::default() };
        let cells =
            populate_rest(20, &BTreeMap::new(), &mut ChaCha8Rng::seed_from_u64(8), &config);
        for tile in cells.values().filter(|tile| tile.kind == TileKind::Ground) {
            let item = tile.item.as_ref().expect("ground food ratio of one");
            assert!(GROUND_FOOD_NAMES.contains(&item.name));
            assert!(GROUND_FOOD_VALUES.contains(&item.value));
        }
    }
}
