use termion::{clear, cursor};

use crate::board::{Board, Mark, Square};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Draws the board with the index of every empty square, so the player
    /// can see what to type.
    pub fn write_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<(Square, Mark)>,
        stats: Option<&str>,
    ) {
        self.buffer.push_str("     a   b   c\n");
        self.buffer.push_str("   ┌───┬───┬───┐\n");

        for row in 0..3u8 {
            self.buffer.push_str(&format!(" {} │", row + 1));
            for column in 0..3u8 {
                let cell = Square::from_row_column(row, column).map(|square| {
                    board
                        .get(square)
                        .map_or(square.index().to_string(), |mark| mark.to_string())
                });
                self.buffer
                    .push_str(&format!(" {} │", cell.unwrap_or_default()));
            }
            self.buffer.push('\n');

            if row < 2 {
                self.buffer.push_str("   ├───┼───┼───┤\n");
            } else {
                self.buffer.push_str("   └───┴───┴───┘\n");
            }
        }

        self.buffer.push('\n');

        // Game info
        self.buffer.push_str(&format!("Turn: {}\n", current_turn));

        if let Some((square, mark)) = last_move {
            self.buffer.push_str(&format!(
                "Last move: {} on {} ({})\n",
                mark,
                square.to_coordinate(),
                square.index()
            ));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<(Square, Mark)>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.write_game_state(board, current_turn, last_move, stats);

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
