//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `basename`: Print the last component of a path
//! - `dirname`: Print the directory portion of a path
//! - `extname`: Print the extension of a path
//! - `join`: Join path segments
//! - `parse`: Decompose a path into a record
//! - `format`: Build a path from a record
//! - `constants`: Print the separator and delimiter
//! - `modules`: List registered module names
//! - `completions`: Generate shell completion scripts

pub mod basename;
pub mod completions;
pub mod constants;
pub mod dirname;
pub mod extname;
pub mod format;
pub mod join;
pub mod modules;
pub mod parse;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use constants::ConstantsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use format::FormatCommand;
pub use join::JoinCommand;
pub use modules::ModulesCommand;
pub use parse::ParseCommand;
