//! Output formatter implementations.

use crate::path::PathRecord;
use crate::Result;

use super::OutputFormatter;

/// Formatter for human-readable output.
///
/// Values are printed verbatim. Records are printed as `key: value` lines in
/// the order root, dir, base, name, ext.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_value(&self, value: &str) -> Result<String> {
        Ok(value.to_string())
    }

    fn format_record(&self, record: &PathRecord) -> Result<String> {
        let fields = [
            ("root", &record.root),
            ("dir", &record.dir),
            ("base", &record.base),
            ("name", &record.name),
            ("ext", &record.ext),
        ];

        Ok(fields
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_value(&self, value: &str) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn format_record(&self, record: &PathRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format_value(&self, value: &str) -> Result<String> {
        Ok(serde_yaml::to_string(value)?.trim_end().to_string())
    }

    fn format_record(&self, record: &PathRecord) -> Result<String> {
        Ok(serde_yaml::to_string(record)?.trim_end().to_string())
    }
}
