//! PvP command - play a game against another human.

use structopt::StructOpt;
use tictactoe::board::Mark;
use tictactoe::game::input_source::HumanInput;
use tictactoe::game::renderer::SimpleRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short = "f", long = "first", default_value = "x")]
    pub first: Mark,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(self.first, false);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
