use super::square::Square;
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..3u8 {
            let cells: Vec<String> = (0..3u8)
                .filter_map(|column| Square::from_row_column(row, column))
                .map(|square| {
                    self.get(square)
                        .map_or(".".to_string(), |mark| mark.to_string())
                })
                .collect();
            writeln!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 9 squares
        assert_eq!(cells.len(), 9, "Invalid number of squares. Expected 9, got {}", cells.len());
        // Squares are listed row-major from the top left, matching square indices.
        for (i, &c) in cells.iter().enumerate() {
            if c != '.' {
                let mark = $crate::board::Mark::from_char(c)
                    .expect("Invalid character in tic-tac-toe position");
                board.put($crate::board::Square::ALL[i], mark).unwrap();
            }
        }
        board
    }};
}
