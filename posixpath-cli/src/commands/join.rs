//! Command to join path segments.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Join path segments into a single path.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join, in order. Empty segments are skipped.
    #[arg(value_name = "SEGMENT", num_args = 0.., allow_hyphen_values = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        log::debug!("joining {} segment(s)", self.segments.len());
        global.print_value(&posixpath::join(&self.segments))
    }
}
