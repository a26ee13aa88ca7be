use crate::alias::{Alias, Command, CommandAlias};
use crate::errors::AliasError;
use log::{debug, trace};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Read-only access to a set of aliases.
/// This is what the command parser and snapshot copies consume;
/// nothing reachable through it can change the aliases.
pub trait ReadOnlyAliases {
    /// The aliases keyed by name
    fn aliases(&self) -> &HashMap<Alias, CommandAlias>;

    /// One `alias: command` line per alias
    fn alias_lines(&self) -> &[String];

    fn count(&self) -> usize {
        self.aliases().len()
    }

    fn command_alias(&self, alias: &Alias) -> Option<&CommandAlias> {
        self.aliases().get(alias)
    }

    fn command(&self, alias: &Alias) -> Option<&Command> {
        self.command_alias(alias).map(CommandAlias::command)
    }

    /// Rewrite `input` if its leading word is a registered alias.
    /// The result is the command text the alias stands for; anything
    /// after the alias is not carried over.
    /// Input whose leading word is not an alias, or is not even a
    /// syntactically valid alias, is returned unchanged.
    fn resolve(&self, input: &str) -> String {
        let word = input.split_whitespace().next().unwrap_or("");

        let alias = match Alias::new(word) {
            Ok(alias) => alias,
            Err(_) => return input.to_owned(),
        };

        match self.command(&alias) {
            Some(command) => {
                debug!("alias {} resolves to {:?}", alias, command.as_str());
                command.to_string()
            }
            None => input.to_owned(),
        }
    }
}

/// A map of aliases to commands that does not allow two entries
/// with the same alias.
/// Alongside the map the store maintains the display lines for its
/// entries; every mutation brings them back in line with the map.
#[derive(Debug, Clone, Default)]
pub struct AliasStore {
    map: HashMap<Alias, CommandAlias>,
    lines: Vec<String>,
}

impl AliasStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a store holding a copy of the aliases in `source`
    pub fn from_view(source: &dyn ReadOnlyAliases) -> Result<Self, AliasError> {
        let mut store = Self::new();
        store.reset_data(source)?;
        Ok(store)
    }

    /// Build a store from raw `(alias, command)` pairs, as held by
    /// the persistence layer.
    /// Fails on the first pair that is malformed or that repeats an
    /// alias seen earlier.
    pub fn from_pairs<I, A, C>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let mut store = Self::new();
        for (alias, command) in pairs {
            store.add_alias(CommandAlias::parse(alias.as_ref(), command.as_ref())?)?;
        }
        Ok(store)
    }

    /// The entries as `(alias, command)` pairs ordered by alias
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.sorted_entries()
            .into_iter()
            .map(|ca| (ca.alias().to_string(), ca.command().to_string()))
            .collect()
    }

    /// Replace the contents of the store with `aliases`.
    /// The entries are folded into an empty store one at a time with
    /// the same rule as `add_alias`, so a collision is reported exactly
    /// as an incremental insert would report it.  On error the store
    /// is left as it was.
    pub fn set_command_aliases<I>(&mut self, aliases: I) -> Result<(), AliasError>
    where
        I: IntoIterator<Item = CommandAlias>,
    {
        let mut scratch = Self::new();
        for command_alias in aliases {
            scratch.add_alias(command_alias)?;
        }
        self.map = scratch.map;
        self.rebuild_lines();
        Ok(())
    }

    /// Replace the contents of the store with the entries of `aliases`.
    /// Entries are re-keyed by the alias they carry.
    pub fn set_aliases(&mut self, aliases: &HashMap<Alias, CommandAlias>) -> Result<(), AliasError> {
        self.set_command_aliases(aliases.values().cloned())
    }

    pub fn reset_data(&mut self, new_data: &dyn ReadOnlyAliases) -> Result<(), AliasError> {
        self.set_aliases(new_data.aliases())
    }

    pub fn has_alias(&self, alias: &Alias) -> bool {
        self.map.contains_key(alias)
    }

    pub fn has_command_alias(&self, command_alias: &CommandAlias) -> bool {
        self.has_alias(command_alias.alias())
    }

    /// Add an alias.  An existing entry for the same alias is never
    /// replaced.
    pub fn add_alias(&mut self, to_add: CommandAlias) -> Result<(), AliasError> {
        if self.has_command_alias(&to_add) {
            return Err(AliasError::DuplicateAlias(to_add.alias().to_string()));
        }
        self.lines.push(to_add.to_string());
        self.map.insert(to_add.alias().clone(), to_add);
        Ok(())
    }

    /// Remove an alias, returning the entry that it was bound to
    pub fn remove_alias(&mut self, to_remove: &Alias) -> Result<CommandAlias, AliasError> {
        let removed = self
            .map
            .remove(to_remove)
            .ok_or_else(|| AliasError::AliasNotFound(to_remove.to_string()))?;
        self.rebuild_lines();
        Ok(removed)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn sorted_entries(&self) -> Vec<&CommandAlias> {
        let mut entries: Vec<&CommandAlias> = self.map.values().collect();
        entries.sort_unstable();
        entries
    }

    fn rebuild_lines(&mut self) {
        let lines: Vec<String> = self
            .sorted_entries()
            .into_iter()
            .map(CommandAlias::to_string)
            .collect();
        trace!("rebuilt {} alias lines", lines.len());
        self.lines = lines;
    }
}

impl ReadOnlyAliases for AliasStore {
    fn aliases(&self) -> &HashMap<Alias, CommandAlias> {
        &self.map
    }

    fn alias_lines(&self) -> &[String] {
        &self.lines
    }
}

impl PartialEq for AliasStore {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl Eq for AliasStore {}

impl Hash for AliasStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Keys are carried inside the values, so hashing the sorted
        // values covers the whole map.
        self.sorted_entries().hash(state);
    }
}

impl std::fmt::Display for AliasStore {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        for line in &self.lines {
            writeln!(fmt, "{}", line)?;
        }
        Ok(())
    }
}
