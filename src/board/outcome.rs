use std::fmt;

use super::mark::Mark;
use super::square::*;
use super::Board;

/// The eight lines that win the game: three rows, three columns and the two
/// diagonals.
pub const WINNING_LINES: [[Square; 3]; 8] = [
    // Rows
    [A1, B1, C1],
    [A2, B2, C2],
    [A3, B3, C3],
    // Columns
    [A1, A2, A3],
    [B1, B2, B3],
    [C1, C2, C3],
    // Diagonals
    [A1, B2, C3],
    [C1, B2, A3],
];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Returns true if `mark` holds all three squares of any winning line.
#[inline(always)]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&square| board.get(square) == Some(mark)))
}

/// Classifies the board. Lines are checked in the order of `WINNING_LINES`
/// and the first complete line decides the winner; a full board without a
/// line is a draw.
#[inline(always)]
pub fn evaluate_terminal(board: &Board) -> Outcome {
    for [a, b, c] in WINNING_LINES.iter() {
        if let Some(mark) = board.get(*a) {
            if board.get(*b) == Some(mark) && board.get(*c) == Some(mark) {
                return Outcome::Win(mark);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
