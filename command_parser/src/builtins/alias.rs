use crate::builtins::{is_builtin, Builtin};
use crate::parser::ParseError;
use crate::tokenizer::split_command_word;
use crate::types::ParsedCommand;
use alias_store::{Alias, Command, CommandAlias};

/// Register a new alias
pub struct AddAliasCommand {}

impl Builtin for AddAliasCommand {
    fn name() -> &'static str {
        "add-alias"
    }

    fn usage() -> &'static str {
        "add-alias ALIAS COMMAND...: make ALIAS stand for the command text COMMAND. \
         Example: add-alias ls list"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        let (name, command) = match split_command_word(args) {
            Some(split) => split,
            None => return Err(Self::invalid("an alias and its command are required")),
        };
        let alias = Alias::new(name).map_err(|e| Self::invalid(e.to_string()))?;
        if is_builtin(alias.as_str()) {
            return Err(Self::invalid(format!(
                "'{}' is a built-in command and cannot be used as an alias",
                alias
            )));
        }
        if command.is_empty() {
            return Err(Self::invalid(format!(
                "missing the command that '{}' stands for",
                alias
            )));
        }
        let command = Command::new(command).map_err(|e| Self::invalid(e.to_string()))?;
        Ok(ParsedCommand::AddAlias(CommandAlias::new(alias, command)))
    }
}

/// Remove a registered alias
pub struct DeleteAliasCommand {}

impl Builtin for DeleteAliasCommand {
    fn name() -> &'static str {
        "delete-alias"
    }

    fn usage() -> &'static str {
        "delete-alias ALIAS: remove the alias ALIAS. Example: delete-alias ls"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        let mut words = args.split_whitespace();
        match (words.next(), words.next()) {
            (Some(name), None) => Alias::new(name)
                .map(ParsedCommand::DeleteAlias)
                .map_err(|e| Self::invalid(e.to_string())),
            (None, _) => Err(Self::invalid("the alias to delete is required")),
            (Some(_), Some(_)) => Err(Self::invalid("only one alias can be deleted at a time")),
        }
    }
}

/// Show every registered alias
pub struct ListAliasCommand {}

impl Builtin for ListAliasCommand {
    fn name() -> &'static str {
        "list-alias"
    }

    fn usage() -> &'static str {
        "list-alias: show every alias and the command it stands for"
    }

    fn parse_args(_args: &str) -> Result<ParsedCommand, ParseError> {
        Ok(ParsedCommand::ListAlias)
    }
}
