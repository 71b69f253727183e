//! Carves the single monotone road from the top-left corner to the far edge.

use std::collections::BTreeMap;

use rand_chacha::rand_core::Rng;

use crate::types::{Direction, Pos, TileKind};

use super::seed::coin_flip;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Vertical,
    Horizontal,
}

impl Heading {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if coin_flip(rng) { Heading::Vertical } else { Heading::Horizontal }
    }

    fn direction(self) -> Direction {
        match self {
            Heading::Vertical => Direction::Down,
            Heading::Horizontal => Direction::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct CarvedRoute {
    pub(super) tiles: BTreeMap<Pos, TileKind>,
    /// Number of steps from the start to the goal.
    pub(super) length: u32,
    pub(super) goal: Pos,
}

pub(super) fn carve_route<R: Rng + ?Sized>(size: usize, rng: &mut R) -> CarvedRoute {
    debug_assert!(size >= 2);
    let last = size as i32 - 1;

    let mut heading = Heading::draw(rng);
    let mut cursor = Pos::ORIGIN;
    let mut tiles = BTreeMap::new();
    tiles.insert(cursor, straight_kind(heading));

    let mut length = 0_u32;
    while cursor.row < last && cursor.col < last {
        let next_heading = Heading::draw(rng);
        cursor = cursor.step(heading.direction());
        tiles.insert(cursor, classify(heading, next_heading));
        heading = next_heading;
        length += 1;
    }
    tiles.insert(cursor, TileKind::Goal);

    CarvedRoute { tiles, length, goal: cursor }
}

fn straight_kind(heading: Heading) -> TileKind {
    match heading {
        Heading::Vertical => TileKind::RoadVertical,
        Heading::Horizontal => TileKind::RoadHorizontal,
    }
}

fn classify(previous: Heading, next: Heading) -> TileKind {
    if previous == next { straight_kind(previous) } else { TileKind::Corner }
}
