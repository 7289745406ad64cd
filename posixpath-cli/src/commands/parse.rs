//! Command to decompose a path into a record.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Decompose a path into root, dir, base, name and ext.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to decompose
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.print_record(&posixpath::parse(&self.path))
    }
}
