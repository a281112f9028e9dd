//! Environment variable handling for configuration overrides.
//!
//! `PATHPAT_*` environment variables override configuration file values.

use std::env;

use crate::case::CaseSensitivity;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathpat::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Recognized variables:
    /// - `PATHPAT_CASE_SENSITIVITY`: sensitive | insensitive | auto
    /// - `PATHPAT_MAX_WIDTH`: positive integer
    /// - `PATHPAT_DETAILED`: boolean
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var("PATHPAT_CASE_SENSITIVITY") {
            let parsed =
                CaseSensitivity::parse(&mode).map_err(|message| Error::Validation {
                    field: "PATHPAT_CASE_SENSITIVITY".into(),
                    message,
                })?;
            config.case_sensitivity = Some(parsed);
        }

        if let Ok(width) = env::var("PATHPAT_MAX_WIDTH") {
            let parsed = width.parse::<usize>().map_err(|_| Error::Validation {
                field: "PATHPAT_MAX_WIDTH".into(),
                message: "must be a positive integer".into(),
            })?;
            config.max_width = Some(parsed);
        }

        if let Ok(detailed) = env::var("PATHPAT_DETAILED") {
            config.detailed = Some(Self::parse_bool("PATHPAT_DETAILED", &detailed)?);
        }

        Ok(())
    }

    /// Parse a boolean environment variable value.
    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("invalid boolean value '{value}'"),
            }),
        }
    }
}
