//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use posixpath::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}
