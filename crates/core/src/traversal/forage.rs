//! Searching the current tile for food.

use log::debug;

use crate::content::SEARCH_COST;

use super::*;

impl Traversal {
    /// Spends the search cost and consumes whatever the current tile holds.
    pub fn forage(&mut self) -> Result<ForageResult, GameError> {
        self.ensure_active()?;
        self.commands_issued += 1;

        self.agent.resource -= SEARCH_COST;
        let item = self.board.take_item(self.agent.pos);
        let delta = item.as_ref().map_or(0, |item| item.value);
        self.agent.resource += delta;

        match &item {
            Some(item) => debug!("found {item} ({delta:+}) at {}", self.agent.pos),
            None => debug!("nothing found at {}", self.agent.pos),
        }
        let terminal = self.check_terminal();
        Ok(ForageResult { item, delta, terminal })
    }
}
