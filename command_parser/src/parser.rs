use crate::builtins::{lookup_builtin, Builtin, HelpCommand};
use crate::tokenizer::split_command_word;
use crate::types::ParsedCommand;
use alias_store::ReadOnlyAliases;
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format for {command}: {reason}")]
    InvalidFormat {
        command: &'static str,
        reason: String,
        usage: &'static str,
    },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ParseError {
    /// The usage text of the command whose arguments were rejected
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidFormat { usage, .. } => Some(*usage),
            ParseError::UnknownCommand(_) => None,
        }
    }
}

/// Tracks whether the text being parsed has already been produced
/// by an alias.  Alias text is literal command text: once input has
/// been rewritten it is never looked up as an alias again, which
/// keeps aliases that refer to each other from rewriting forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionState {
    FreshInput,
    AlreadySubstituted,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandParser {}

impl CommandParser {
    pub fn new() -> Self {
        Self {}
    }

    /// Main entry point to the parser; parses one line of user input.
    /// Built-in command words always win over an alias of the same
    /// name.
    pub fn parse_command(
        &self,
        input: &str,
        aliases: &dyn ReadOnlyAliases,
    ) -> Result<ParsedCommand, ParseError> {
        self.parse_in_state(input, aliases, SubstitutionState::FreshInput)
    }

    pub fn parse_in_state(
        &self,
        input: &str,
        aliases: &dyn ReadOnlyAliases,
        state: SubstitutionState,
    ) -> Result<ParsedCommand, ParseError> {
        let (word, args) = match split_command_word(input) {
            Some(split) => split,
            None => return Err(HelpCommand::invalid("no command was given")),
        };

        if let Some(builtin) = lookup_builtin(word) {
            debug!("dispatching {:?} to built-in {}", input, builtin.name);
            return (builtin.parse)(args);
        }

        match state {
            SubstitutionState::FreshInput => {
                let substituted = aliases.resolve(input);
                if substituted != input {
                    debug!("alias rewrote {:?} to {:?}", input, substituted);
                    return self.parse_in_state(
                        &substituted,
                        aliases,
                        SubstitutionState::AlreadySubstituted,
                    );
                }
            }
            SubstitutionState::AlreadySubstituted => {
                debug!("{:?} came from an alias; not expanding it again", word);
            }
        }

        Err(ParseError::UnknownCommand(word.to_owned()))
    }
}
