//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the extension of a path, including its leading dot.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.print_value(&posixpath::extname(&self.path))
    }
}
