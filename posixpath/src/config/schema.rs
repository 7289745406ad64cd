//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use posixpath::config::Config;
/// use posixpath::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.log_mode, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format for command results.
    pub output_format: Option<OutputFormat>,

    /// Verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,
}

impl Config {
    /// Check field values that the YAML schema alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `log_mode` is not a known level.
    pub fn validate(&self) -> Result<()> {
        if let Some(mode) = &self.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".to_string(),
                message,
            })?;
        }
        Ok(())
    }

    /// The configured log level, if any.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format_or_default(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
