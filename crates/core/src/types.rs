use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::item::ResourceItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { row: 0, col: 0 };

    pub fn step(self, direction: Direction) -> Pos {
        match direction {
            Direction::Up => Pos { row: self.row - 1, col: self.col },
            Direction::Right => Pos { row: self.row, col: self.col + 1 },
            Direction::Down => Pos { row: self.row + 1, col: self.col },
            Direction::Left => Pos { row: self.row, col: self.col - 1 },
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TileKind {
    RoadVertical,
    RoadHorizontal,
    Corner,
    Tree,
    Ground,
    Goal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "right" => Ok(Direction::Right),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            _ => Err(GameError::UnknownDirection(token.trim().to_string())),
        }
    }
}

/// Lifecycle of a single crossing. Everything except `Active` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunState {
    Active,
    Succeeded,
    Depleted,
    /// The caller quit before the run resolved.
    Abandoned,
}

impl RunState {
    pub fn is_active(self) -> bool {
        self == RunState::Active
    }

    pub fn terminal(self) -> Option<TerminalState> {
        match self {
            RunState::Succeeded => Some(TerminalState::Succeeded),
            RunState::Depleted => Some(TerminalState::Depleted),
            RunState::Active | RunState::Abandoned => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TerminalState {
    Succeeded,
    Depleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub steps_taken: u32,
    pub blocked: bool,
    pub terminal: Option<TerminalState>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForageResult {
    pub item: Option<ResourceItem>,
    /// Signed effect of the item found, excluding the search cost.
    pub delta: i32,
    pub terminal: Option<TerminalState>,
}

impl ForageResult {
    pub fn found(&self) -> bool {
        self.item.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub kind: TileKind,
    pub agent_here: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown direction `{0}` (expected up, right, down or left)")]
    UnknownDirection(String),
    #[error("the run has already ended ({0:?})")]
    RunFinished(RunState),
    #[error("the run is still in progress")]
    RunNotFinished,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 1 (got {value})")]
    RatioOutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapGenError {
    #[error("board size must be at least {min} (got {size})")]
    SizeTooSmall { size: usize, min: usize },
    #[error("invalid generation config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
