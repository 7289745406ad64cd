//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, logger setup and output printing.

use crate::error::CliError;
use posixpath::output::OutputFormat;
use posixpath::{Config, ConfigBuilder, LogLevel, Logger, PathRecord};
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Effective output format after flags, environment and config files.
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// Print a string result in the selected output format.
    pub fn print_value(&self, value: &str) -> Result<(), CliError> {
        let rendered = self.format.create_formatter().format_value(value)?;
        println!("{rendered}");
        Ok(())
    }

    /// Print a path record in the selected output format.
    pub fn print_record(&self, record: &PathRecord) -> Result<(), CliError> {
        let rendered = self.format.create_formatter().format_record(record)?;
        println!("{rendered}");
        Ok(())
    }
}

/// Parse an output format given on the command line.
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. The `--format` flag (highest priority)
/// 2. Environment variables
/// 3. The `--config` file, or the discovered `posixpath.yaml`
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(
    config_file: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = config_file {
        builder = builder.with_config_file(path);
    }

    if format.is_some() {
        builder = builder.with_config(Config {
            output_format: format,
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Choose the logger for this run.
///
/// CLI flags win over the configured `log_mode`. The configuration already
/// carries any `POSIXPATH_LOG_MODE` override.
pub fn init_logger(verbose: bool, quiet: bool, config: &Config) -> Logger {
    if verbose || quiet {
        return posixpath::init_logger(verbose, quiet);
    }

    match config.log_level() {
        Some(level) => Logger::new(level),
        None => Logger::new(LogLevel::Normal),
    }
}
