mod input;

pub use input::{parse_command_input, InputError};
