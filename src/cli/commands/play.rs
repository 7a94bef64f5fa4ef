//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactoe::board::Mark;
use tictactoe::game::input_source::ConditionalInput;
use tictactoe::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "c", long = "color", default_value = "o")]
    pub color: Mark,
    #[structopt(short = "f", long = "first", default_value = "o")]
    pub first: Mark,
    #[structopt(long = "parallel", help = "Score the computer's candidate moves in parallel")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut config = create_config(self.first, true);
        config.parallel = self.parallel;
        run_game_loop(
            ConditionalInput { human: self.color },
            ConditionalStatsRenderer { human: self.color },
            config,
        );
    }
}
