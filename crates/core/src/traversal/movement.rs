//! Unit-step movement with departure fatigue.

use log::{debug, trace};

use super::*;

impl Traversal {
    /// Moves up to `steps` cells in one direction.
    ///
    /// Each unit step charges the fatigue of the tile being left. A step off the
    /// grid ends the command as blocked with no charge. A charge that leaves the
    /// resource negative ends the command before the agent enters the next cell.
    /// Arriving on the goal ends the command.
    pub fn move_agent(&mut self, direction: Direction, steps: u32) -> Result<MoveResult, GameError> {
        self.ensure_active()?;
        self.commands_issued += 1;

        let mut steps_taken = 0;
        let mut blocked = false;
        for _ in 0..steps {
            let from = self.agent.pos;
            let to = from.step(direction);
            if !self.board.in_bounds(to) {
                blocked = true;
                break;
            }

            self.agent.resource += self.departure_cost();
            if self.agent.resource < 0 {
                trace!("collapsed leaving {from} with resource {}", self.agent.resource);
                break;
            }

            self.agent.pos = to;
            steps_taken += 1;
            trace!("stepped {from} -> {to}, resource {}", self.agent.resource);
            if to == self.board.goal() {
                break;
            }
        }

        let terminal = self.check_terminal();
        debug!(
            "move {direction:?} x{steps}: took {steps_taken}, blocked {blocked}, now at {} with {}",
            self.agent.pos, self.agent.resource
        );
        Ok(MoveResult { steps_taken, blocked, terminal })
    }
}
