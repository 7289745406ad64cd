//! Shell completion generation command.
//!
//! Writes a completion script for the requested shell to stdout. Install
//! hints go to stderr unless `--quiet` is set.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "posixpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn install_hint(shell: Shell) -> Option<String> {
    let hint = match shell {
        Shell::Bash => format!(
            "#   {BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
        ),
        Shell::Zsh => format!(
            "#   {BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}\n\
             # Make sure ~/.zsh/completions is in your $fpath"
        ),
        Shell::Fish => format!("#   {BIN_NAME} completions fish | source"),
        Shell::PowerShell => format!(
            "#   {BIN_NAME} completions powershell | Out-String | Invoke-Expression"
        ),
        _ => return None,
    };
    Some(hint)
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Run the following command to enable completions:");
                eprintln!("{hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
