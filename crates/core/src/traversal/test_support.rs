//! Shared fixtures for the traversal test suites.
//! Boards here are hand-built so costs and item placement are known exactly.

use super::*;
use crate::board::Tile;
use crate::item::ResourceItem;

/// A `size`x`size` board whose route runs along the top row to a goal in the
/// top-right corner. Every other cell is barren ground.
pub(super) fn corridor_board(size: usize) -> Board {
    corridor_board_with_items(size, &[])
}

pub(super) fn corridor_board_with_items(size: usize, items: &[(Pos, ResourceItem)]) -> Board {
    let mut tiles = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let tile = if row > 0 {
                Tile { kind: TileKind::Ground, item: None }
            } else if col + 1 == size {
                Tile::route(TileKind::Goal)
            } else {
                Tile::route(TileKind::RoadHorizontal)
            };
            tiles.push(tile);
        }
    }
    for (pos, item) in items {
        let tile = &mut tiles[(pos.row as usize) * size + (pos.col as usize)];
        tile.item = Some(item.clone());
    }
    Board::from_parts(size, tiles, size as u32 - 1, Pos { row: 0, col: size as i32 - 1 })
}

/// An active run on `board` with the agent at `pos` holding `resource`.
pub(super) fn run_at(board: Board, pos: Pos, resource: i32) -> Traversal {
    let mut traversal = Traversal::new(board);
    traversal.agent = Agent { pos, resource };
    traversal.initial_resource = resource;
    traversal.state = RunState::Active;
    traversal
}
