//! Interactive prompt loop that drives a traversal from text input.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use wasteland_core::{Direction, ForageResult, MoveResult, RunState, Traversal};

use crate::render::{agent_symbol, render_board};

const DEFAULT_NAME: &str = "Wanderer";

enum Action {
    Move,
    Search,
    Quit,
}

fn parse_action(line: &str) -> Option<Action> {
    match line.trim() {
        "1" => Some(Action::Move),
        "2" => Some(Action::Search),
        "3" => Some(Action::Quit),
        _ => None,
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the player's name. Blank input or end of input picks a default.
    pub fn prompt_name(&mut self) -> Result<String> {
        write!(self.output, "What is your name? ")?;
        self.output.flush()?;
        let name = self.read_line()?.map(|line| line.trim().to_string()).unwrap_or_default();
        Ok(if name.is_empty() { DEFAULT_NAME.to_string() } else { name })
    }

    /// Plays until the run ends or the player quits, returning the final score.
    /// End of input counts as quitting.
    pub fn play(&mut self, name: &str, traversal: &mut Traversal) -> Result<i32> {
        writeln!(self.output, "{name} is lost in the wastelands and must find a way home!")?;
        writeln!(
            self.output,
            "You have {} food items, but the road is {} steps long!\n",
            traversal.resource(),
            traversal.board().route_length()
        )?;
        writeln!(self.output, "{name} must find additional food by searching the wastes...\n")?;

        let symbol = agent_symbol(name);
        while traversal.state().is_active() {
            write!(self.output, "{}", render_board(traversal, symbol))?;
            writeln!(self.output, "{name} has {} health left...", traversal.resource())?;
            writeln!(self.output, "Choose an action: 1. Move \t 2. Search \t 3. Quit")?;

            let Some(line) = self.read_line()? else {
                traversal.abandon()?;
                break;
            };
            match parse_action(&line) {
                Some(Action::Move) => match self.read_move()? {
                    Some((direction, steps)) => {
                        let result = traversal.move_agent(direction, steps)?;
                        self.report_move(name, &result)?;
                    }
                    None => traversal.abandon()?,
                },
                Some(Action::Search) => {
                    writeln!(self.output, "{}", "-".repeat(60))?;
                    let result = traversal.forage()?;
                    self.report_forage(name, &result)?;
                }
                Some(Action::Quit) => traversal.abandon()?,
                None => writeln!(self.output, "-----------> Please choose a valid action!")?,
            }
            writeln!(self.output, "{}", "-".repeat(60))?;
        }

        match traversal.state() {
            RunState::Succeeded => {
                writeln!(self.output, "{name} escapes the wastelands and returns home!")?
            }
            RunState::Depleted => writeln!(self.output, "{name} dies in the wastelands...")?,
            RunState::Abandoned | RunState::Active => writeln!(
                self.output,
                "{name} wakes with a start! Phew, it was all just a dream!"
            )?,
        }
        let score = traversal.score()?;
        writeln!(self.output, "Your final score is: {score}")?;
        debug!("run finished as {:?} after {} commands", traversal.state(), traversal.commands_issued());
        Ok(score)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Re-prompts until a valid direction and step count arrive. `None` on end of input.
    fn read_move(&mut self) -> Result<Option<(Direction, u32)>> {
        let direction = loop {
            write!(self.output, "Choose a direction: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else { return Ok(None) };
            match line.parse::<Direction>() {
                Ok(direction) => break direction,
                Err(error) => writeln!(self.output, "{error}")?,
            }
        };

        let steps = loop {
            write!(self.output, "Choose number of steps: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else { return Ok(None) };
            match line.trim().parse::<u32>() {
                Ok(steps) => break steps,
                Err(_) => writeln!(self.output, "Steps needs to be a non-negative integer!")?,
            }
        };
        writeln!(self.output, "{}", "-".repeat(60))?;
        Ok(Some((direction, steps)))
    }

    fn report_move(&mut self, name: &str, result: &MoveResult) -> Result<()> {
        if result.blocked {
            writeln!(self.output, "{name} hits an invisible wall...")?;
        }
        Ok(())
    }

    fn report_forage(&mut self, name: &str, result: &ForageResult) -> Result<()> {
        let Some(item) = &result.item else {
            writeln!(self.output, "{name} searches the area but finds nothing.")?;
            return Ok(());
        };
        writeln!(self.output, "{name} searches the area and finds a {}!", item.name)?;
        if result.delta < 0 {
            writeln!(self.output, "Oh no! {name} loses {} health!", -result.delta)?;
        } else {
            writeln!(self.output, "{name} gains {} health!", result.delta)?;
        }
        Ok(())
    }
}
