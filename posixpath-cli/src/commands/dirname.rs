//! Command to print the directory portion of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the directory portion of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.print_value(&posixpath::dirname(&self.path))
    }
}
