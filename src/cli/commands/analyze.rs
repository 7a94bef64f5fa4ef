//! Analyze command - score every legal move from a position.

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::SearchContext;
use tictactoe::board::{Board, Mark};
use tictactoe::tictactoe_search::score_position_moves;

use super::util::side_to_move;
use super::Command;

#[derive(StructOpt)]
pub struct AnalyzeArgs {
    #[structopt(short, long)]
    pub board: Board,
    #[structopt(short, long)]
    pub turn: Option<Mark>,
    #[structopt(short = "f", long = "first", default_value = "x")]
    pub first: Mark,
    #[structopt(long = "parallel")]
    pub parallel: bool,
}

impl Command for AnalyzeArgs {
    fn execute(self) {
        let turn = match side_to_move(&self.board, self.turn, self.first) {
            Ok(turn) => turn,
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        };

        println!("{}\n{} to move\n", self.board, turn);

        let mut context = SearchContext::with_parallel(self.parallel);
        match score_position_moves(&mut context, &self.board, turn, turn) {
            Ok(scores) => {
                for (square, score) in scores {
                    println!("{} ({}): {}", square.to_coordinate(), square.index(), score);
                }
                println!(
                    "\npositions searched: {}, duration: {:?}",
                    context.searched_position_count(),
                    context.last_search_duration().unwrap_or_default()
                );
            }
            Err(err) => eprintln!("Failed to analyze position: {}", err),
        }
    }
}
