mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::TicTacToe;

fn main() {
    env_logger::init();
    TicTacToe::from_args().execute();
}
