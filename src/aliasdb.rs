use anyhow::{anyhow, Context};
use log::debug;
use sqlite::Value;
use std::convert::TryInto;
use std::path::Path;

/// Persists aliases as ordered `(alias, command)` rows in a sqlite
/// database
pub struct AliasDb {
    connection: sqlite::Connection,
}

impl AliasDb {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let connection = sqlite::open(path)
            .with_context(|| format!("opening alias database {}", path.display()))?;
        debug!("opened alias database {}", path.display());
        Self::with_connection(connection)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let connection = sqlite::open(":memory:").context("opening in-memory alias database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: sqlite::Connection) -> anyhow::Result<Self> {
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS aliases (
                    position INTEGER PRIMARY KEY,
                    alias TEXT NOT NULL UNIQUE,
                    command TEXT NOT NULL
                )",
            )
            .context("creating the aliases table")?;
        Ok(Self { connection })
    }

    /// All stored rows in the order they were saved
    pub fn load(&self) -> anyhow::Result<Vec<(String, String)>> {
        let mut cursor = self
            .connection
            .prepare("select alias, command from aliases order by position")?
            .cursor();

        let mut rows = vec![];
        while let Some(row) = cursor.next()? {
            let alias = row[0]
                .as_string()
                .ok_or_else(|| anyhow!("alias column holds {:?}, expected text", row[0]))?;
            let command = row[1]
                .as_string()
                .ok_or_else(|| anyhow!("command column holds {:?}, expected text", row[1]))?;
            rows.push((alias.to_string(), command.to_string()));
        }
        debug!("loaded {} aliases", rows.len());
        Ok(rows)
    }

    /// Replace the stored rows with `pairs`.  Either every row is
    /// written or the previous contents are kept.
    pub fn save(&self, pairs: &[(String, String)]) -> anyhow::Result<()> {
        self.connection.execute("BEGIN")?;
        match self.replace_rows(pairs) {
            Ok(()) => {
                self.connection.execute("COMMIT")?;
                debug!("saved {} aliases", pairs.len());
                Ok(())
            }
            Err(err) => {
                self.connection.execute("ROLLBACK").ok();
                Err(err.context("saving aliases"))
            }
        }
    }

    fn replace_rows(&self, pairs: &[(String, String)]) -> anyhow::Result<()> {
        self.connection.execute("DELETE FROM aliases")?;
        for (position, (alias, command)) in pairs.iter().enumerate() {
            let mut cursor = self
                .connection
                .prepare("insert into aliases values (?, ?, ?)")?
                .cursor();
            cursor.bind(&[
                Value::Integer(position.try_into()?),
                Value::String(alias.clone()),
                Value::String(command.clone()),
            ])?;
            cursor.next()?;
        }
        Ok(())
    }
}
