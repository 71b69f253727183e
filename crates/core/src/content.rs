//! Fixed terrain and forage tables shared by generation and traversal.

use std::ops::RangeInclusive;

use crate::types::TileKind;

pub const TREE_FOOD_NAMES: [&str; 2] = ["Berry", "Fruit"];
pub const GROUND_FOOD_NAMES: [&str; 2] = ["Root", "Mushroom"];

pub const POISONED_TREE_FOOD_VALUES: RangeInclusive<i32> = -3..=-1;
pub const TREE_FOOD_VALUES: RangeInclusive<i32> = 7..=14;
pub const GROUND_FOOD_VALUES: RangeInclusive<i32> = 5..=10;

/// Resource spent on every forage attempt, successful or not.
pub const SEARCH_COST: i32 = 1;

/// Resource charged for leaving a tile of the given kind.
pub fn fatigue_cost(kind: TileKind) -> i32 {
    match kind {
        TileKind::RoadVertical | TileKind::RoadHorizontal | TileKind::Corner => -1,
        TileKind::Tree => -3,
        TileKind::Ground => -2,
        TileKind::Goal => 0,
    }
}

pub fn visual_tag(kind: TileKind) -> char {
    match kind {
        TileKind::RoadVertical => '|',
        TileKind::RoadHorizontal => '=',
        TileKind::Corner => '#',
        TileKind::Tree => '*',
        TileKind::Ground => '.',
        TileKind::Goal => 'X',
    }
}

impl TileKind {
    pub fn is_route(self) -> bool {
        matches!(
            self,
            TileKind::RoadVertical | TileKind::RoadHorizontal | TileKind::Corner | TileKind::Goal
        )
    }
}
