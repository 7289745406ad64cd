//! Command to print the last component of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the last component of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to split
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Suffix to strip from the component, such as ".txt"
    #[arg(long, short, value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = posixpath::basename(&self.path, self.suffix.as_deref());
        global.print_value(&base)
    }
}
