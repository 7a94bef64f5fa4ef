use std::convert::TryFrom;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

pub const NUM_SQUARES: usize = 9;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-c])([1-3])$").expect("COORDINATE_RE regex should be valid")
});

/// A cell of the 3x3 grid, stored as its row-major index 0-8.
///
/// Coordinates name the column with a letter (`a`-`c`, left to right) and
/// the row with a number (`1`-`3`, top to bottom), so `a1` is index 0 and
/// `c3` is index 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square(u8);

pub const A1: Square = Square(0);
pub const B1: Square = Square(1);
pub const C1: Square = Square(2);
pub const A2: Square = Square(3);
pub const B2: Square = Square(4);
pub const C2: Square = Square(5);
pub const A3: Square = Square(6);
pub const B3: Square = Square(7);
pub const C3: Square = Square(8);

impl Square {
    pub const ALL: [Square; NUM_SQUARES] = [A1, B1, C1, A2, B2, C2, A3, B3, C3];

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn column(self) -> u8 {
        self.0 % 3
    }

    pub fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row < 3 && column < 3 {
            Some(Square(row * 3 + column))
        } else {
            None
        }
    }

    pub fn to_coordinate(self) -> String {
        let file = (b'a' + self.column()) as char;
        format!("{}{}", file, self.row() + 1)
    }

    pub fn from_coordinate(coordinate: &str) -> Option<Self> {
        let caps = COORDINATE_RE.captures(coordinate)?;
        let column = caps[1].as_bytes()[0] - b'a';
        let row = caps[2].as_bytes()[0] - b'1';
        Self::from_row_column(row, column)
    }
}

impl TryFrom<usize> for Square {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < NUM_SQUARES {
            Ok(Square(index as u8))
        } else {
            Err(BoardError::SquareOutOfRange { index })
        }
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
