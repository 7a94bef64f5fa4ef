use crate::board::Mark;
use crate::game::command::GameCommand;
use crate::input_handler::{parse_command_input, InputError};

pub trait InputSource {
    fn get_command(&self, current_turn: Mark) -> Result<Option<GameCommand>, InputError>;
}

fn read_human_command() -> Result<Option<GameCommand>, InputError> {
    match parse_command_input() {
        Ok(command) => Ok(Some(command)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_command(&self, _current_turn: Mark) -> Result<Option<GameCommand>, InputError> {
        read_human_command()
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_command(&self, _current_turn: Mark) -> Result<Option<GameCommand>, InputError> {
        Ok(Some(GameCommand::ComputerMove))
    }
}

pub struct ConditionalInput {
    pub human: Mark,
}

impl InputSource for ConditionalInput {
    fn get_command(&self, current_turn: Mark) -> Result<Option<GameCommand>, InputError> {
        if current_turn == self.human {
            read_human_command()
        } else {
            Ok(Some(GameCommand::ComputerMove))
        }
    }
}
