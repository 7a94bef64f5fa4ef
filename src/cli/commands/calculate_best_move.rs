//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::SearchContext;
use tictactoe::board::{Board, Mark};
use tictactoe::tictactoe_search::search_best_move;

use super::util::side_to_move;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long)]
    pub board: Board,
    #[structopt(short, long)]
    pub turn: Option<Mark>,
    #[structopt(short = "f", long = "first", default_value = "x")]
    pub first: Mark,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let turn = match side_to_move(&self.board, self.turn, self.first) {
            Ok(turn) => turn,
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        };

        let mut context = SearchContext::new();
        match search_best_move(&mut context, &self.board, turn, turn) {
            Ok((best_move, score)) => println!(
                "{} ({}), score {}",
                best_move.to_coordinate(),
                best_move.index(),
                score
            ),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
