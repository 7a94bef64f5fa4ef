pub mod error;
pub mod mark;
pub mod outcome;
pub mod square;

mod display;
#[cfg(test)]
mod tests;

use std::str::FromStr;

use smallvec::SmallVec;

pub use error::BoardError;
pub use mark::Mark;
pub use outcome::Outcome;
pub use square::{Square, NUM_SQUARES};

/// Contents of a single square; `None` is an empty square.
pub type Cell = Option<Mark>;

/// Empty squares in ascending index order.
pub type SquareList = SmallVec<[Square; NUM_SQUARES]>;

/// A 3x3 grid of marks. The board only knows where marks are; whose turn it
/// is and whether the mark counts obey turn order is tracked by its owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn cells(&self) -> &[Cell; NUM_SQUARES] {
        &self.cells
    }

    #[inline(always)]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, mark: Mark) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied { square });
        }
        self.cells[square.index()] = Some(mark);
        Ok(())
    }

    /// Exact inverse of `put`: clears the square and returns the mark that
    /// was on it.
    pub fn remove(&mut self, square: Square) -> Result<Mark, BoardError> {
        self.cells[square.index()]
            .take()
            .ok_or(BoardError::SquareEmpty { square })
    }

    /// Returns a copy of the board with `mark` placed on `square`, leaving
    /// `self` untouched.
    pub fn with_move(&self, square: Square, mark: Mark) -> Result<Board, BoardError> {
        let mut next = *self;
        next.put(square, mark)?;
        Ok(next)
    }

    #[inline(always)]
    pub fn legal_moves(&self) -> SquareList {
        Square::ALL
            .iter()
            .copied()
            .filter(|&square| !self.is_occupied(square))
            .collect()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn outcome(&self) -> Outcome {
        outcome::evaluate_terminal(self)
    }

    pub fn has_line(&self, mark: Mark) -> bool {
        outcome::has_line(self, mark)
    }

    /// The side to move, assuming `first` opened the game and both sides
    /// have alternated since.
    pub fn turn(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opposite()) {
            first.opposite()
        } else {
            first
        }
    }

    /// Whether this board can arise from a game that `first` opened: the
    /// opener is level with or one mark ahead of the other side, and at
    /// most one side has completed a line.
    pub fn is_consistent(&self, first: Mark) -> bool {
        let opener = self.count(first);
        let second = self.count(first.opposite());
        let counts_ok = opener == second || opener == second + 1;
        counts_ok && !(self.has_line(Mark::X) && self.has_line(Mark::O))
    }

    /// Compact nine character form, row-major, `.` for an empty square.
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', |mark| mark.to_char()))
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses the nine character form produced by `to_notation`. Whitespace
    /// and `/` row separators are ignored, and `-` or `_` may stand for an
    /// empty square.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if cells.len() != NUM_SQUARES {
            return Err(BoardError::InvalidBoardString {
                input: input.to_string(),
                reason: "expected exactly 9 squares",
            });
        }

        let mut board = Board::new();
        for (square, &c) in Square::ALL.iter().zip(cells.iter()) {
            match c {
                '.' | '-' | '_' => {}
                _ => {
                    let mark = Mark::from_char(c).ok_or_else(|| {
                        BoardError::InvalidBoardString {
                            input: input.to_string(),
                            reason: "squares must be X, O or .",
                        }
                    })?;
                    board.put(*square, mark)?;
                }
            }
        }

        Ok(board)
    }
}
