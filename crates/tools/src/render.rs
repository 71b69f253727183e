//! Board-to-text rendering for the terminal shell.

use wasteland_core::{Traversal, visual_tag};

const COLUMN_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest board whose columns can all be labelled.
pub const MAX_RENDERED_SIZE: usize = COLUMN_LABELS.len();

/// Symbol used for the agent: the first letter of the player's name.
pub fn agent_symbol(name: &str) -> char {
    name.trim().chars().next().unwrap_or('@')
}

pub fn render_board(traversal: &Traversal, agent: char) -> String {
    let view = traversal.view();
    let mut text = String::from("   ");
    for &label in COLUMN_LABELS.iter().take(view.len()) {
        text.push(char::from(label));
        text.push(' ');
    }
    text.push('\n');

    for (row, cells) in view.iter().enumerate() {
        text.push_str(&format!("{row:>2} "));
        for cell in cells {
            text.push(if cell.agent_here { agent } else { visual_tag(cell.kind) });
            text.push(' ');
        }
        text.push('\n');
    }
    text
}
