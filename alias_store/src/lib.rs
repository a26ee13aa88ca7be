//! Command aliases: validated alias names, the command text they
//! stand for, and a store that keeps them unique.

mod alias;
mod errors;
mod store;

pub use alias::{Alias, Command, CommandAlias, MAX_ALIAS_LEN};
pub use errors::AliasError;
pub use store::{AliasStore, ReadOnlyAliases};
