//! Commands the presentation layer sends to the engine.

use std::fmt;

/// A request from whoever is driving the game. Front ends translate clicks
/// or typed input into one of these and hand it to `Engine::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Place the mark of the side to move on the square at `index`. The
    /// index is validated by the engine, not by the front end.
    HumanMove { index: usize },
    /// Let the engine play the best move for the side to move.
    ComputerMove,
    /// Start over from an empty board.
    Reset,
}

impl fmt::Display for GameCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameCommand::HumanMove { index } => write!(f, "move {}", index),
            GameCommand::ComputerMove => write!(f, "computer move"),
            GameCommand::Reset => write!(f, "reset"),
        }
    }
}
