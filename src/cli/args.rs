//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    analyze::AnalyzeArgs, calculate_best_move::CalculateBestMoveArgs,
    count_positions::CountPositionsArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "An unbeatable tic-tac-toe engine implemented in Rust"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches the full game tree using alpha-beta pruning. You play O unless you pick a mark with `--color` (`x`, `o` or `random`). The side that opens is set with `--first` (default: o)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The side that opens is set with `--first` (default: x)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself. Every game between two perfect players ends in a draw."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for the side to move on a board given with `--board` (required), nine characters of `x`, `o` and `.` read row by row, e.g. `xo..x....`. The side to move is inferred from the marks unless given with `--turn`."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "analyze",
        about = "Print the exact score of every legal move on a board given with `--board`, from the point of view of the side to move."
    )]
    Analyze(AnalyzeArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions visited while solving the empty board, and report the time it took to do so. By default, this searches the full game tree. The routine can be run with alpha-beta pruning by selecting `--strategy alpha-beta`. Also reports the number of distinct reachable boards."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            Analyze(cmd),
            CountPositions(cmd),
        }
    }
}
