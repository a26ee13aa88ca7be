use crate::parser::ParseError;
use crate::types::ParsedCommand;
use lazy_static::lazy_static;
use std::collections::HashMap;

mod alias;
mod contacts;
mod general;

pub use alias::{AddAliasCommand, DeleteAliasCommand, ListAliasCommand};
pub use contacts::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, FilterCommand, FindCommand, ListCommand,
};
pub use general::{ExitCommand, HelpCommand};

/// A command word that the parser recognizes directly
pub trait Builtin {
    fn name() -> &'static str;

    /// One line describing the arguments, shown by `help` and
    /// alongside format errors
    fn usage() -> &'static str;

    /// Parse the argument text that followed the command word
    fn parse_args(args: &str) -> Result<ParsedCommand, ParseError>;

    fn invalid(reason: impl Into<String>) -> ParseError {
        ParseError::InvalidFormat {
            command: Self::name(),
            reason: reason.into(),
            usage: Self::usage(),
        }
    }
}

pub type BuiltinParseFunc = fn(args: &str) -> Result<ParsedCommand, ParseError>;

#[derive(Clone, Copy)]
pub struct BuiltinSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub parse: BuiltinParseFunc,
}

pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinSpec> {
    BUILTINS.get(name)
}

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains_key(name)
}

/// The built-in command words in sorted order
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTINS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// The usage line of every built-in, sorted by command word
pub fn usage_lines() -> Vec<&'static str> {
    builtin_names()
        .into_iter()
        .filter_map(|name| lookup_builtin(name).map(|spec| spec.usage))
        .collect()
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltinSpec> = {
        let mut builtins = HashMap::new();
        macro_rules! builtins {
            ($($CmdType:ty),* $(,)? ) => {
                $(
                builtins.insert(<$CmdType>::name(), BuiltinSpec {
                    name: <$CmdType>::name(),
                    usage: <$CmdType>::usage(),
                    parse: <$CmdType>::parse_args,
                });
                )*
            }
        }

        builtins!(
            AddCommand,
            EditCommand,
            DeleteCommand,
            ClearCommand,
            FindCommand,
            FilterCommand,
            ListCommand,
            HelpCommand,
            ExitCommand,
            AddAliasCommand,
            DeleteAliasCommand,
            ListAliasCommand,
        );

        builtins
    };
}
