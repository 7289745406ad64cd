//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, ConstantsCommand, DirnameCommand, ExtnameCommand,
    FormatCommand, JoinCommand, ModulesCommand, ParseCommand,
};
use crate::utils::parse_output_format;
use clap::{Parser, Subcommand};
use posixpath::output::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for POSIX path string manipulation.
#[derive(Parser)]
#[command(name = "posixpath")]
#[command(version, about = "Manipulate POSIX path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format: text, json or yaml
    #[arg(long, value_name = "FORMAT", global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Read configuration from this file instead of discovering posixpath.yaml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the last component of a path
    Basename(BasenameCommand),

    /// Print the directory portion of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Extname(ExtnameCommand),

    /// Join path segments
    Join(JoinCommand),

    /// Decompose a path into root, dir, base, name and ext
    Parse(ParseCommand),

    /// Build a path from its parts
    Format(FormatCommand),

    /// Print the separator and delimiter
    Constants(ConstantsCommand),

    /// List registered module names
    Modules(ModulesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
