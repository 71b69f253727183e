//! Turn-based traversal engine: agent state, commands, termination and scoring.
//! Command handlers live in focused submodules.

use log::debug;

use crate::board::Board;
use crate::config::TraversalConfig;
use crate::content::fatigue_cost;
use crate::state::Agent;
use crate::types::*;

mod forage;
mod movement;

#[cfg(test)]
mod test_support;

pub struct Traversal {
    board: Board,
    agent: Agent,
    initial_resource: i32,
    state: RunState,
    commands_issued: u32,
}

impl Traversal {
    pub fn new(board: Board) -> Self {
        Self::start(board, TraversalConfig::default())
    }

    pub fn with_config(board: Board, config: TraversalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(board, config))
    }

    fn start(board: Board, config: TraversalConfig) -> Self {
        let initial_resource =
            (config.starting_resource_fraction * f64::from(board.route_length())).floor() as i32;
        let mut traversal = Self {
            board,
            agent: Agent::new(initial_resource),
            initial_resource,
            state: RunState::Active,
            commands_issued: 0,
        };
        traversal.check_terminal();
        debug!(
            "run started: resource {initial_resource}, route length {}, state {:?}",
            traversal.board.route_length(),
            traversal.state
        );
        traversal
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn resource(&self) -> i32 {
        self.agent.resource
    }

    pub fn position(&self) -> Pos {
        self.agent.pos
    }

    pub fn initial_resource(&self) -> i32 {
        self.initial_resource
    }

    pub fn commands_issued(&self) -> u32 {
        self.commands_issued
    }

    /// Fatigue that leaving the agent's current tile would cost.
    pub fn departure_cost(&self) -> i32 {
        self.board.kind_at(self.agent.pos).map_or(0, fatigue_cost)
    }

    /// Resolves the run if it can no longer continue. Depletion wins over arrival.
    pub fn check_terminal(&mut self) -> Option<TerminalState> {
        if self.state.is_active() {
            if self.agent.resource < 1 {
                self.state = RunState::Depleted;
            } else if self.agent.pos == self.board.goal() {
                self.state = RunState::Succeeded;
            }
        }
        self.state.terminal()
    }

    /// Quits an active run without resolving it.
    pub fn abandon(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        self.commands_issued += 1;
        self.state = RunState::Abandoned;
        debug!("run abandoned at {} with resource {}", self.agent.pos, self.agent.resource);
        Ok(())
    }

    /// Final score as a percentage of the starting resource.
    ///
    /// Depleted runs score zero. Abandoned runs use the same ratio as a
    /// successful crossing, floored at zero.
    pub fn score(&self) -> Result<i32, GameError> {
        match self.state {
            RunState::Active => Err(GameError::RunNotFinished),
            RunState::Depleted => Ok(0),
            RunState::Succeeded | RunState::Abandoned => {
                Ok(ratio_score(self.initial_resource, self.agent.resource).max(0))
            }
        }
    }

    /// Rows of display categories with the agent's cell flagged.
    pub fn view(&self) -> Vec<Vec<CellView>> {
        (0..self.board.size())
            .map(|row| {
                self.board
                    .row(row)
                    .iter()
                    .enumerate()
                    .map(|(col, tile)| CellView {
                        kind: tile.kind,
                        agent_here: self.agent.pos == Pos { row: row as i32, col: col as i32 },
                    })
                    .collect()
            })
            .collect()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.state.is_active() { Ok(()) } else { Err(GameError::RunFinished(self.state)) }
    }
}

fn ratio_score(initial: i32, remaining: i32) -> i32 {
    if initial <= 0 {
        return 0;
    }
    (100.0 * f64::from(remaining) / f64::from(initial)).round() as i32
}
