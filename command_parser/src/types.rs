use alias_store::{Alias, CommandAlias};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// A one-based position in the displayed contact list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Index)
    }
}

impl FromStr for Index {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<NonZeroUsize>().map(Index)
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.0)
    }
}

/// The field prefixes understood by `filter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPrefix {
    /// `n/`
    Name,
    /// `p/`
    Phone,
    /// `e/`
    Email,
    /// `a/`
    Address,
    /// `t/`
    Tag,
}

impl FieldPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldPrefix::Name => "n/",
            FieldPrefix::Phone => "p/",
            FieldPrefix::Email => "e/",
            FieldPrefix::Address => "a/",
            FieldPrefix::Tag => "t/",
        }
    }

    pub fn all() -> &'static [FieldPrefix] {
        &[
            FieldPrefix::Name,
            FieldPrefix::Phone,
            FieldPrefix::Email,
            FieldPrefix::Address,
            FieldPrefix::Tag,
        ]
    }
}

impl FromStr for FieldPrefix {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|prefix| prefix.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for FieldPrefix {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.as_str())
    }
}

/// A fully parsed command, ready to be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Add { details: String },
    Edit { index: Index, details: String },
    Delete { index: Index },
    Clear,
    Find { keywords: Vec<String> },
    Filter { prefixes: Vec<FieldPrefix> },
    List,
    Help,
    Exit,
    AddAlias(CommandAlias),
    DeleteAlias(Alias),
    ListAlias,
}

impl ParsedCommand {
    /// The command word that produces this command
    pub fn name(&self) -> &'static str {
        match self {
            ParsedCommand::Add { .. } => "add",
            ParsedCommand::Edit { .. } => "edit",
            ParsedCommand::Delete { .. } => "delete",
            ParsedCommand::Clear => "clear",
            ParsedCommand::Find { .. } => "find",
            ParsedCommand::Filter { .. } => "filter",
            ParsedCommand::List => "list",
            ParsedCommand::Help => "help",
            ParsedCommand::Exit => "exit",
            ParsedCommand::AddAlias(_) => "add-alias",
            ParsedCommand::DeleteAlias(_) => "delete-alias",
            ParsedCommand::ListAlias => "list-alias",
        }
    }
}

/// Formats the command back into the text that parses to it
impl std::fmt::Display for ParsedCommand {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.name())?;
        match self {
            ParsedCommand::Add { details } => write!(fmt, " {}", details),
            ParsedCommand::Edit { index, details } => write!(fmt, " {} {}", index, details),
            ParsedCommand::Delete { index } => write!(fmt, " {}", index),
            ParsedCommand::Find { keywords } => write!(fmt, " {}", keywords.join(" ")),
            ParsedCommand::Filter { prefixes } => {
                for prefix in prefixes {
                    write!(fmt, " {}", prefix)?;
                }
                Ok(())
            }
            ParsedCommand::AddAlias(command_alias) => write!(
                fmt,
                " {} {}",
                command_alias.alias(),
                command_alias.command()
            ),
            ParsedCommand::DeleteAlias(alias) => write!(fmt, " {}", alias),
            ParsedCommand::Clear
            | ParsedCommand::List
            | ParsedCommand::Help
            | ParsedCommand::Exit
            | ParsedCommand::ListAlias => Ok(()),
        }
    }
}
