//! Environment variable handling for configuration overrides.
//!
//! This module provides support for POSIXPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::output::OutputFormat;
use std::env;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "POSIXPATH_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use posixpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(FORMAT_ENV) {
            let format: OutputFormat = value.parse().map_err(|_| Error::Validation {
                field: FORMAT_ENV.into(),
                message: format!("'{value}' is not one of text, json, yaml"),
            })?;
            config.output_format = Some(format);
        }

        if let Ok(value) = env::var(LOG_MODE_ENV) {
            LogLevel::parse(&value).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn new(keys: &[&'static str]) -> Self {
            let saved = keys.iter().map(|k| (*k, env::var(k).ok())).collect();
            for key in keys {
                env::remove_var(key);
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        let _guard = EnvGuard::new(&[FORMAT_ENV, LOG_MODE_ENV]);
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_format_override() {
        let _guard = EnvGuard::new(&[FORMAT_ENV, LOG_MODE_ENV]);
        env::set_var(FORMAT_ENV, "yaml");

        let mut config = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    #[serial]
    fn test_invalid_format_rejected() {
        let _guard = EnvGuard::new(&[FORMAT_ENV, LOG_MODE_ENV]);
        env::set_var(FORMAT_ENV, "xml");

        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == FORMAT_ENV));
    }

    #[test]
    #[serial]
    fn test_log_mode_override() {
        let _guard = EnvGuard::new(&[FORMAT_ENV, LOG_MODE_ENV]);
        env::set_var(LOG_MODE_ENV, "verbose");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.log_mode, Some("verbose".to_string()));

        env::set_var(LOG_MODE_ENV, "loud");
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
    }
}
