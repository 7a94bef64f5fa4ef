//! Command input parsing for the terminal front end.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;
use crate::game::command::GameCommand;

static INDEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([0-9]+)$").expect("INDEX_RE regex should be valid"));
static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-c][1-3])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

/// Accepts a square index (`0`-`8`), a coordinate (`a1`-`c3`), `ai` to let
/// the computer move, `reset` to start over, or `quit` to leave. Indices are
/// passed through unchecked so the engine can report out-of-range squares.
impl FromStr for GameCommand {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if let Some(caps) = INDEX_RE.captures(&trimmed) {
            return caps[1]
                .parse::<usize>()
                .map(|index| GameCommand::HumanMove { index })
                .map_err(|_| InputError::InvalidInput {
                    input: input.to_string(),
                });
        }

        if let Some(caps) = COORD_RE.captures(&trimmed) {
            if let Some(square) = Square::from_coordinate(&caps[1]) {
                return Ok(GameCommand::HumanMove {
                    index: square.index(),
                });
            }
        }

        match trimmed.as_str() {
            "ai" | "engine" => Ok(GameCommand::ComputerMove),
            "reset" | "new" => Ok(GameCommand::Reset),
            "q" | "quit" | "exit" => Err(InputError::UserExit),
            _ => Err(InputError::InvalidInput {
                input: input.to_string(),
            }),
        }
    }
}

/// Reads one line from stdin and parses it as a command.
pub fn parse_command_input() -> Result<GameCommand, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read line: {}", e),
        })?;

    // End of input
    if read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!("4".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 4 }));
        assert_eq!(" 0 \n".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 0 }));
        // Range checks belong to the engine.
        assert_eq!("12".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 12 }));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("a1".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 0 }));
        assert_eq!("B2".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 4 }));
        assert_eq!("c3".parse::<GameCommand>(), Ok(GameCommand::HumanMove { index: 8 }));
        assert!("d1".parse::<GameCommand>().is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("ai".parse::<GameCommand>(), Ok(GameCommand::ComputerMove));
        assert_eq!("reset".parse::<GameCommand>(), Ok(GameCommand::Reset));
        assert_eq!("New".parse::<GameCommand>(), Ok(GameCommand::Reset));
        assert_eq!("quit".parse::<GameCommand>(), Err(InputError::UserExit));
        assert_eq!("q".parse::<GameCommand>(), Err(InputError::UserExit));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "-1".parse::<GameCommand>(),
            Err(InputError::InvalidInput {
                input: "-1".to_string()
            })
        );
        assert!("".parse::<GameCommand>().is_err());
        assert!("99999999999999999999999".parse::<GameCommand>().is_err());
    }
}
