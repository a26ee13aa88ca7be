use crate::aliasdb::AliasDb;
use alias_store::{AliasStore, ReadOnlyAliases};
use anyhow::Context;
use command_parser::{builtin_names, usage_lines, CommandParser, ParsedCommand};
use log::warn;
use std::io::Write;

/// What the caller should do after a line has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Owns the aliases for the lifetime of the application and runs
/// command lines against them.  When a database is attached, every
/// successful change to the aliases is written through to it.
pub struct Session {
    aliases: AliasStore,
    parser: CommandParser,
    db: Option<AliasDb>,
}

impl Session {
    pub fn new(db: Option<AliasDb>) -> anyhow::Result<Self> {
        let aliases = match &db {
            Some(db) => {
                AliasStore::from_pairs(db.load()?).context("loading the stored aliases")?
            }
            None => AliasStore::new(),
        };
        Ok(Self {
            aliases,
            parser: CommandParser::new(),
            db,
        })
    }

    pub fn aliases(&self) -> &AliasStore {
        &self.aliases
    }

    /// Words worth offering when completing the start of a line
    pub fn completion_words(&self) -> Vec<String> {
        let mut words: Vec<String> = builtin_names().into_iter().map(str::to_owned).collect();
        words.extend(self.aliases.aliases().keys().map(|alias| alias.to_string()));
        words.sort();
        words.dedup();
        words
    }

    /// Parse and run one line of input, writing any output to `out`
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Outcome> {
        let command = self.parser.parse_command(line, &self.aliases)?;
        self.execute(command, out)
    }

    fn execute<W: Write>(&mut self, command: ParsedCommand, out: &mut W) -> anyhow::Result<Outcome> {
        match command {
            ParsedCommand::AddAlias(command_alias) => {
                let alias = command_alias.alias().clone();
                let line = command_alias.to_string();
                self.aliases.add_alias(command_alias)?;
                if let Err(err) = self.persist() {
                    self.aliases.remove_alias(&alias)?;
                    return Err(err);
                }
                writeln!(out, "New alias added: {}", line)?;
            }
            ParsedCommand::DeleteAlias(alias) => {
                let removed = self.aliases.remove_alias(&alias)?;
                if let Err(err) = self.persist() {
                    self.aliases.add_alias(removed)?;
                    return Err(err);
                }
                writeln!(out, "Deleted alias: {}", alias)?;
            }
            ParsedCommand::ListAlias => {
                if self.aliases.is_empty() {
                    writeln!(out, "No aliases defined")?;
                }
                for line in self.aliases.alias_lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            ParsedCommand::Help => {
                for line in usage_lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            ParsedCommand::Exit => {
                writeln!(out, "Exiting")?;
                return Ok(Outcome::Exit);
            }
            other => {
                // The contact list itself lives outside of this program
                writeln!(out, "{}", other)?;
            }
        }
        Ok(Outcome::Continue)
    }

    fn persist(&self) -> anyhow::Result<()> {
        match &self.db {
            Some(db) => db.save(&self.aliases.to_pairs()).map_err(|err| {
                warn!("alias change not saved: {:#}", err);
                err
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alias_store::{Alias, AliasError};
    use command_parser::ParseError;
    use pretty_assertions::assert_eq;

    fn run(session: &mut Session, line: &str) -> anyhow::Result<(Outcome, String)> {
        let mut out = vec![];
        let outcome = session.run_line(line, &mut out)?;
        Ok((outcome, String::from_utf8(out).unwrap()))
    }

    fn output(session: &mut Session, line: &str) -> String {
        run(session, line).unwrap().1
    }

    #[test]
    fn add_use_and_delete_alias() {
        let mut session = Session::new(None).unwrap();
        assert_eq!(output(&mut session, "list-alias"), "No aliases defined\n");
        assert_eq!(
            output(&mut session, "add-alias ls list"),
            "New alias added: ls: list\n"
        );
        assert_eq!(output(&mut session, "ls"), "list\n");
        assert_eq!(output(&mut session, "list-alias"), "ls: list\n");
        assert_eq!(output(&mut session, "delete-alias ls"), "Deleted alias: ls\n");
        assert!(!session.aliases().has_alias(&Alias::new("ls").unwrap()));
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let mut session = Session::new(None).unwrap();
        output(&mut session, "add-alias ls list");
        let err = run(&mut session, "add-alias ls clear").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AliasError>(),
            Some(&AliasError::DuplicateAlias("ls".to_owned()))
        );
        assert_eq!(output(&mut session, "ls"), "list\n");
    }

    #[test]
    fn deleting_missing_alias_fails() {
        let mut session = Session::new(None).unwrap();
        let err = run(&mut session, "delete-alias missing").unwrap_err();
        assert_eq!(
            err.downcast_ref::<AliasError>(),
            Some(&AliasError::AliasNotFound("missing".to_owned()))
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut session = Session::new(None).unwrap();
        let err = run(&mut session, "xyz").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::UnknownCommand("xyz".to_owned()))
        );
    }

    #[test]
    fn exit_and_help() {
        let mut session = Session::new(None).unwrap();
        let (outcome, _) = run(&mut session, "exit").unwrap();
        assert_eq!(outcome, Outcome::Exit);
        output(&mut session, "add-alias q exit");
        assert_eq!(run(&mut session, "q").unwrap().0, Outcome::Exit);

        let help = output(&mut session, "help");
        assert_eq!(help.lines().count(), builtin_names().len());
    }

    #[test]
    fn aliases_are_written_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.db");
        {
            let mut session = Session::new(Some(AliasDb::open(&path).unwrap())).unwrap();
            output(&mut session, "add-alias ls list");
            output(&mut session, "add-alias ff find foo");
            output(&mut session, "delete-alias ls");
        }
        let mut session = Session::new(Some(AliasDb::open(&path).unwrap())).unwrap();
        assert_eq!(session.aliases().alias_lines(), &["ff: find foo".to_owned()]);
        assert_eq!(output(&mut session, "ff"), "find foo\n");
    }

    #[test]
    fn failed_save_undoes_the_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.db");
        let mut session = Session::new(Some(AliasDb::open(&path).unwrap())).unwrap();
        output(&mut session, "add-alias ls list");

        sqlite::open(&path)
            .unwrap()
            .execute("DROP TABLE aliases")
            .unwrap();

        assert!(run(&mut session, "add-alias q exit").is_err());
        assert!(!session.aliases().has_alias(&Alias::new("q").unwrap()));

        assert!(run(&mut session, "delete-alias ls").is_err());
        assert_eq!(session.aliases().alias_lines(), &["ls: list".to_owned()]);
        assert_eq!(output(&mut session, "ls"), "list\n");
    }

    #[test]
    fn completion_words_include_aliases() {
        let mut session = Session::new(None).unwrap();
        output(&mut session, "add-alias ls list");
        let words = session.completion_words();
        assert!(words.contains(&"ls".to_owned()));
        assert!(words.contains(&"list-alias".to_owned()));
        assert_eq!(words.len(), builtin_names().len() + 1);
    }
}
