//! Programmatic configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Assembles the final configuration from all sources.
///
/// Precedence, highest to lowest: programmatic override, environment
/// variables, project file, user file, built-in defaults.
///
/// # Examples
///
/// ```
/// use pathpat::config::{Config, ConfigBuilder};
/// use pathpat::CaseSensitivity;
///
/// let custom = Config {
///     case_sensitivity: Some(CaseSensitivity::Sensitive),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.case_sensitivity, Some(CaseSensitivity::Sensitive));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with default behavior (files and environment on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory the project config search starts from.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Overrides the directory the user config is loaded from.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Skips configuration file loading.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the final merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// or if an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
            for source in sources {
                config.merge_from(&source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(&overrides);
        }

        Ok(config)
    }
}
