//! Command to print the path constants.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use posixpath::output::OutputFormat;
use posixpath::path::{DELIMITER_STR, SEP_STR};

/// Print the separator and delimiter.
#[derive(Args)]
pub struct ConstantsCommand {}

impl ConstantsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match global.format {
            OutputFormat::Text => {
                println!("sep: {SEP_STR}");
                println!("delimiter: {DELIMITER_STR}");
            }
            OutputFormat::Json | OutputFormat::Yaml => {
                let value = serde_json::json!({ "sep": SEP_STR, "delimiter": DELIMITER_STR });
                let rendered = if global.format == OutputFormat::Json {
                    serde_json::to_string_pretty(&value).map_err(posixpath::Error::from)?
                } else {
                    format!("sep: '{SEP_STR}'\ndelimiter: '{DELIMITER_STR}'")
                };
                println!("{rendered}");
            }
        }
        Ok(())
    }
}
