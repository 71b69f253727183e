use xxhash_rust::xxh3::xxh3_64;

use crate::config::GenerationConfig;
use crate::item::ResourceItem;
use crate::mapgen::MapGenerator;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub item: Option<ResourceItem>,
}

impl Tile {
    pub fn route(kind: TileKind) -> Self {
        debug_assert!(kind.is_route());
        Self { kind, item: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
    route_length: u32,
    goal: Pos,
}

impl Board {
    /// Generates a board from a seed. Sizes below two are rejected.
    pub fn build(size: usize, seed: u64, config: &GenerationConfig) -> Result<Self, MapGenError> {
        MapGenerator::new(seed, *config).generate(size)
    }

    pub(crate) fn from_parts(size: usize, tiles: Vec<Tile>, route_length: u32, goal: Pos) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles, route_length, goal }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn route_length(&self) -> u32 {
        self.route_length
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    pub fn kind_at(&self, pos: Pos) -> Option<TileKind> {
        self.tile(pos).map(|tile| tile.kind)
    }

    /// Removes and returns the item on a tile. Later calls on the same tile yield `None`.
    pub fn take_item(&mut self, pos: Pos) -> Option<ResourceItem> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.tiles[idx].item.take()
    }

    /// Tiles of one row, left to right.
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.tiles[row * self.size..(row + 1) * self.size]
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |row| {
            (0..self.size).map(move |col| Pos { row: row as i32, col: col as i32 })
        })
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.size as u32).to_le_bytes());
        bytes.extend(self.route_length.to_le_bytes());
        bytes.extend(self.goal.row.to_le_bytes());
        bytes.extend(self.goal.col.to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile.kind {
                TileKind::RoadVertical => 0,
                TileKind::RoadHorizontal => 1,
                TileKind::Corner => 2,
                TileKind::Tree => 3,
                TileKind::Ground => 4,
                TileKind::Goal => 5,
            });
            match &tile.item {
                Some(item) => {
                    bytes.push(1);
                    bytes.extend(item.name.as_bytes());
                    bytes.extend(item.value.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }
        bytes
    }

    pub fn snapshot_hash(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.size + (pos.col as usize)
    }
}
