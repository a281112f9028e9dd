//! Configuration file discovery and loading.
//!
//! Discovers and loads pathpat configuration files from the user config
//! directory and from project directories, with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use pathpat::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.pathpat/config.yaml` (precedence 1)
    /// 2. The nearest project `pathpat.yaml`, walking up from
    ///    `working_dir` (precedence 2)
    ///
    /// The `user_dir` parameter overrides where the user config is loaded
    /// from.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        // Sort by precedence (higher precedence last for easier merging)
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if present.
    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match home::home_dir() {
                Some(home) => home.join(".pathpat").join("config.yaml"),
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Walk up from `working_dir` looking for the nearest `pathpat.yaml`.
    fn discover_project_config(working_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = working_dir.to_path_buf();
        loop {
            let candidate = current.join("pathpat.yaml");
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok(None),
            }
        }
    }

    /// Read and parse a single configuration file.
    fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_user_config_is_none() {
        let temp = tempfile::tempdir().unwrap();
        let loaded = ConfigLoader::load_user_config(Some(temp.path())).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_user_config_loaded() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("config.yaml"), "max_width: 100\n").unwrap();

        let loaded = ConfigLoader::load_user_config(Some(temp.path()))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.precedence, 1);
        assert_eq!(loaded.config.max_width, Some(100));
    }

    #[test]
    fn test_project_config_found_in_parent() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join("pathpat.yaml"),
            "case_sensitivity: insensitive\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let loaded = ConfigLoader::discover_project_config(&nested)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.precedence, 2);
        assert_eq!(
            loaded.config.case_sensitivity,
            Some(crate::CaseSensitivity::Insensitive)
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("config.yaml"), "max_width: [nope\n").unwrap();
        assert!(ConfigLoader::load_user_config(Some(temp.path())).is_err());
    }

    #[test]
    fn test_sources_sorted_by_precedence() {
        let user = tempfile::tempdir().unwrap();
        fs::write(user.path().join("config.yaml"), "max_width: 60\n").unwrap();
        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join("pathpat.yaml"), "max_width: 90\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(user.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].precedence < sources[1].precedence);
    }
}
