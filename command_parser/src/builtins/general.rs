use crate::builtins::Builtin;
use crate::parser::ParseError;
use crate::types::ParsedCommand;

/// Show the usage of every command
pub struct HelpCommand {}

impl Builtin for HelpCommand {
    fn name() -> &'static str {
        "help"
    }

    fn usage() -> &'static str {
        "help: show the usage of every command"
    }

    fn parse_args(_args: &str) -> Result<ParsedCommand, ParseError> {
        Ok(ParsedCommand::Help)
    }
}

/// Leave the application
pub struct ExitCommand {}

impl Builtin for ExitCommand {
    fn name() -> &'static str {
        "exit"
    }

    fn usage() -> &'static str {
        "exit: leave the application"
    }

    fn parse_args(_args: &str) -> Result<ParsedCommand, ParseError> {
        Ok(ParsedCommand::Exit)
    }
}
