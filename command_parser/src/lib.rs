//! Parser for the contact book command line.
//! Raw input is dispatched to a built-in command when its leading
//! word names one, and otherwise rewritten through the registered
//! aliases before being parsed again.

mod builtins;
mod parser;
mod tokenizer;
mod types;

pub use builtins::{builtin_names, is_builtin, lookup_builtin, usage_lines, BuiltinSpec};
pub use parser::{CommandParser, ParseError, SubstitutionState};
pub use tokenizer::split_command_word;
pub use types::{FieldPrefix, Index, ParsedCommand};
