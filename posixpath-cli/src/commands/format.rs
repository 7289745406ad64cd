//! Command to build a path from a record.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use posixpath::PathRecord;

/// Build a path from its parts.
///
/// `base` takes precedence over `name` and `ext`; `dir` takes precedence
/// over `root`.
#[derive(Args)]
pub struct FormatCommand {
    /// Root, used only when no directory is given
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Final component; overrides --name and --ext
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,

    /// Final component without extension
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extension, with or without the leading dot
    #[arg(long, value_name = "EXT", allow_hyphen_values = true)]
    pub ext: Option<String>,

    /// A whole record as JSON, e.g. '{"dir":"/tmp","base":"a.txt"}'.
    /// Individual flags override its fields.
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

impl FormatCommand {
    /// Assemble the record described by the flags.
    pub fn record(self) -> Result<PathRecord, CliError> {
        let mut record = match self.json {
            Some(json) => serde_json::from_str(&json).map_err(posixpath::Error::from)?,
            None => PathRecord::default(),
        };

        let overrides = [
            (self.root, &mut record.root),
            (self.dir, &mut record.dir),
            (self.base, &mut record.base),
            (self.name, &mut record.name),
            (self.ext, &mut record.ext),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        Ok(record)
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let record = self.record()?;
        global.print_value(&posixpath::format(&record))
    }
}
