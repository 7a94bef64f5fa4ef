//! Shared utilities for CLI commands.

use tictactoe::board::{Board, Mark};
use tictactoe::game::engine::EngineConfig;
use tictactoe::game::input_source::InputSource;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(first_to_move: Mark, auto_respond: bool) -> EngineConfig {
    EngineConfig {
        first_to_move,
        auto_respond,
        ..EngineConfig::default()
    }
}

/// Side to move for a board given on the command line: the explicit
/// `--turn` if present, otherwise inferred from the mark counts with
/// `first` opening the game.
pub(crate) fn side_to_move(board: &Board, turn: Option<Mark>, first: Mark) -> Result<Mark, String> {
    match turn {
        Some(turn) => Ok(turn),
        None if board.is_consistent(first) => Ok(board.turn(first)),
        None => Err(format!(
            "cannot infer the side to move with {} opening; pass --turn",
            first
        )),
    }
}
