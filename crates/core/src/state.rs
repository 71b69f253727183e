use crate::types::Pos;

/// The crossing agent. Mutated only by the traversal engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub pos: Pos,
    /// Remaining health. May dip below zero on the step that ends a run.
    pub resource: i32,
}

impl Agent {
    pub fn new(resource: i32) -> Self {
        Self { pos: Pos::ORIGIN, resource }
    }
}
