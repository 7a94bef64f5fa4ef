use log::debug;

use crate::board::{Mark, Outcome};
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input,
            renderer,
        }
    }

    /// Runs until the game ends or the user quits, returning the outcome at
    /// that point.
    pub fn run(&mut self) -> Outcome {
        loop {
            let current_turn = self.engine.turn();
            let last_move = self.engine.last_move();

            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, last_move);

            match self.engine.outcome() {
                Outcome::Win(Mark::X) => println!("X wins!"),
                Outcome::Win(Mark::O) => println!("O wins!"),
                Outcome::Draw => println!("Draw!"),
                Outcome::InProgress => {}
            }
            if self.engine.is_game_over() {
                break;
            }

            match self.input.get_command(current_turn) {
                Ok(Some(command)) => match self.engine.dispatch(command) {
                    Ok(outcome) => {
                        debug!("{} -> {}", command, outcome);
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => println!("error: {}", error),
            }
        }

        self.engine.outcome()
    }
}
