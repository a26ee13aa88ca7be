//! The commands that operate on the contact list.
//! Only their argument shape is checked here; the person details are
//! carried through as text for the contact book to interpret.
use crate::builtins::Builtin;
use crate::parser::ParseError;
use crate::tokenizer::split_command_word;
use crate::types::{FieldPrefix, Index, ParsedCommand};

fn starts_with_field_prefix(text: &str) -> bool {
    FieldPrefix::all()
        .iter()
        .any(|prefix| text.starts_with(prefix.as_str()))
}

/// Add a person
pub struct AddCommand {}

impl Builtin for AddCommand {
    fn name() -> &'static str {
        "add"
    }

    fn usage() -> &'static str {
        "add n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...: add a person. \
         Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        if args.is_empty() {
            return Err(Self::invalid("the person's details are required"));
        }
        if !starts_with_field_prefix(args) {
            return Err(Self::invalid(
                "the person's details must start with a field prefix such as n/",
            ));
        }
        Ok(ParsedCommand::Add {
            details: args.to_owned(),
        })
    }
}

/// Edit the person at a position in the list
pub struct EditCommand {}

impl Builtin for EditCommand {
    fn name() -> &'static str {
        "edit"
    }

    fn usage() -> &'static str {
        "edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...: edit the person at INDEX. \
         Example: edit 1 p/91234567"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        let (index, details) = match split_command_word(args) {
            Some(split) => split,
            None => return Err(Self::invalid("INDEX is required")),
        };
        let index: Index = index
            .parse()
            .map_err(|_| Self::invalid("INDEX must be a positive integer"))?;
        if details.is_empty() {
            return Err(Self::invalid("at least one field to edit must be provided"));
        }
        if !starts_with_field_prefix(details) {
            return Err(Self::invalid(
                "the fields to edit must start with a field prefix such as p/",
            ));
        }
        Ok(ParsedCommand::Edit {
            index,
            details: details.to_owned(),
        })
    }
}

/// Delete the person at a position in the list
pub struct DeleteCommand {}

impl Builtin for DeleteCommand {
    fn name() -> &'static str {
        "delete"
    }

    fn usage() -> &'static str {
        "delete INDEX: delete the person at INDEX. Example: delete 1"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        if args.is_empty() {
            return Err(Self::invalid("INDEX is required"));
        }
        let index: Index = args
            .parse()
            .map_err(|_| Self::invalid("INDEX must be a positive integer"))?;
        Ok(ParsedCommand::Delete { index })
    }
}

/// Remove every person
pub struct ClearCommand {}

impl Builtin for ClearCommand {
    fn name() -> &'static str {
        "clear"
    }

    fn usage() -> &'static str {
        "clear: remove every person"
    }

    fn parse_args(_args: &str) -> Result<ParsedCommand, ParseError> {
        Ok(ParsedCommand::Clear)
    }
}

/// Find people whose names contain any of the keywords
pub struct FindCommand {}

impl Builtin for FindCommand {
    fn name() -> &'static str {
        "find"
    }

    fn usage() -> &'static str {
        "find KEYWORD [MORE_KEYWORDS]...: list the people whose names contain any of the keywords. \
         Example: find alice bob"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_owned).collect();
        if keywords.is_empty() {
            return Err(Self::invalid("at least one keyword is required"));
        }
        Ok(ParsedCommand::Find { keywords })
    }
}

/// Choose which fields are shown for each person
pub struct FilterCommand {}

impl Builtin for FilterCommand {
    fn name() -> &'static str {
        "filter"
    }

    fn usage() -> &'static str {
        "filter PREFIX [MORE_PREFIXES]...: show only the given fields (n/ p/ e/ a/ t/). \
         Example: filter p/ e/"
    }

    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError> {
        let mut prefixes = vec![];
        for word in args.split_whitespace() {
            let prefix: FieldPrefix = word
                .parse()
                .map_err(|_| Self::invalid(format!("unknown field prefix {:?}", word)))?;
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
        if prefixes.is_empty() {
            return Err(Self::invalid("at least one field prefix is required"));
        }
        Ok(ParsedCommand::Filter { prefixes })
    }
}

/// Show every person
pub struct ListCommand {}

impl Builtin for ListCommand {
    fn name() -> &'static str {
        "list"
    }

    fn usage() -> &'static str {
        "list: show every person"
    }

    fn parse_args(_args: &str) -> Result<ParsedCommand, ParseError> {
        Ok(ParsedCommand::List)
    }
}
