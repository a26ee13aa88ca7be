use crate::errors::AliasError;
use std::str::FromStr;

/// The longest name accepted for an alias
pub const MAX_ALIAS_LEN: usize = 32;

/// A short name that stands in for a full command.
/// The name is held in its normalized form (surrounding whitespace
/// removed) so that equality and hashing operate on that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alias {
    name: String,
}

impl Alias {
    pub fn new(name: &str) -> Result<Self, AliasError> {
        let name = name.trim();
        if !Self::is_valid(name) {
            return Err(AliasError::InvalidAlias(name.to_owned()));
        }
        Ok(Self {
            name: name.to_owned(),
        })
    }

    /// Returns true if `name` satisfies the alias grammar:
    /// a leading ascii letter or digit followed by letters, digits,
    /// `-` or `_`.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        name.len() <= MAX_ALIAS_LEN
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl FromStr for Alias {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.name)
    }
}

/// The literal text of a full command that an alias expands to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Command {
    text: String,
}

impl Command {
    pub fn new(text: &str) -> Result<Self, AliasError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AliasError::BlankCommand);
        }
        Ok(Self {
            text: text.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Command {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.text)
    }
}

/// An alias bound to the command it stands for.
/// The `Display` form, `alias: command`, is the line shown
/// when aliases are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandAlias {
    alias: Alias,
    command: Command,
}

impl CommandAlias {
    pub fn new(alias: Alias, command: Command) -> Self {
        Self { alias, command }
    }

    /// Validate and bind a raw `(alias, command)` pair, as read back
    /// from storage.
    pub fn parse(alias: &str, command: &str) -> Result<Self, AliasError> {
        Ok(Self::new(Alias::new(alias)?, Command::new(command)?))
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

impl std::fmt::Display for CommandAlias {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(fmt, "{}: {}", self.alias, self.command)
    }
}
