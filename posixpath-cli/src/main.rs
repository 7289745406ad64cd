//! Main entry point for the posixpath CLI.
//!
//! This is the command-line interface to the posixpath library.
//! It provides one subcommand per path operation:
//! - `basename`, `dirname`, `extname`: split a path
//! - `join`: join segments
//! - `parse`, `format`: convert between paths and path records

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use error::CliError;
use utils::GlobalOptions;

fn run(cli: Cli) -> Result<(), CliError> {
    let config = utils::load_configuration(cli.config.as_deref(), cli.format)?;

    if !utils::init_logger(cli.verbose, cli.quiet, &config).install() {
        log::debug!("logger already installed; keeping the existing one");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        format: config.output_format_or_default(),
    };

    match cli.command {
        Command::Basename(cmd) => cmd.execute(&global),
        Command::Dirname(cmd) => cmd.execute(&global),
        Command::Extname(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Parse(cmd) => cmd.execute(&global),
        Command::Format(cmd) => cmd.execute(&global),
        Command::Constants(cmd) => cmd.execute(&global),
        Command::Modules(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
