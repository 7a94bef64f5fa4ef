//! Count positions command - count the positions visited solving the game.

use structopt::StructOpt;
use tictactoe::board::Mark;
use tictactoe::game::position_counter::{run_count_positions, CountPositionsStrategy};

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
    #[structopt(short = "f", long = "first", default_value = "x")]
    pub first: Mark,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        run_count_positions(self.strategy, self.first);
    }
}
