use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square index {index} is out of range, squares are numbered 0-8")]
    SquareOutOfRange { index: usize },
    #[error("Cannot put a mark on {square}, it is already occupied")]
    SquareOccupied { square: Square },
    #[error("Cannot remove a mark from {square}, it is empty")]
    SquareEmpty { square: Square },
    #[error("Invalid board {input:?}: {reason}")]
    InvalidBoardString { input: String, reason: &'static str },
}
