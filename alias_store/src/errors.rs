use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("Invalid alias {0:?}: aliases start with a letter or digit and may contain letters, digits, '-' and '_' (at most 32 characters)")]
    InvalidAlias(String),
    #[error("The command an alias stands for cannot be blank")]
    BlankCommand,
    #[error("The alias '{0}' already exists")]
    DuplicateAlias(String),
    #[error("The alias '{0}' does not exist")]
    AliasNotFound(String),
}
