//! Output formatting for path results.
//!
//! Every engine operation returns either a plain string or a
//! [`PathRecord`](crate::path::PathRecord). This module renders both as
//! human-readable text, JSON, or YAML.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::PathRecord;

pub use formatters::{JsonFormatter, TextFormatter, YamlFormatter};

/// Trait for rendering path results into an output format.
pub trait OutputFormatter {
    /// Render a single string result.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_value(&self, value: &str) -> Result<String>;

    /// Render a path record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_record(&self, record: &PathRecord) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use posixpath::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("'{s}' is not one of text, json, yaml"),
            }),
        }
    }
}
