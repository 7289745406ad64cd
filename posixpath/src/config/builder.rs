//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds the effective configuration from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use posixpath::config::{Config, ConfigBuilder};
/// use posixpath::output::OutputFormat;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Yaml),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format, Some(OutputFormat::Yaml));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    user_config: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder with default discovery settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load this file as the project config instead of discovering one.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Read the user config from `path` instead of `~/.posixpath/config.yaml`.
    #[must_use]
    pub fn with_user_config(mut self, path: &Path) -> Self {
        self.user_config = Some(path.to_path_buf());
        self
    }

    /// Add a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore POSIXPATH_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable holds an invalid value, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            self.load_sources()?
        };

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user) = ConfigLoader::load_user_config(self.user_config.as_deref())? {
            sources.push(user);
        }

        // An explicit file replaces project discovery.
        if let Some(path) = &self.config_file {
            sources.push(ConfigSource {
                path: path.clone(),
                precedence: 2,
                config: ConfigLoader::load_file(path)?,
            });
        } else {
            let working_dir = match &self.working_dir {
                Some(dir) => dir.clone(),
                None => env::current_dir()?,
            };
            if let Some(project) = ConfigLoader::discover_project_config(&working_dir)? {
                sources.push(project);
            }
        }

        Ok(sources)
    }
}
