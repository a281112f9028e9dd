//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::case::CaseSensitivity;

/// Default rendering width when neither the caller nor any configuration
/// source supplies one.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults.
/// Configuration merges hierarchically from multiple sources, see
/// [`ConfigBuilder`](crate::config::ConfigBuilder).
///
/// # Examples
///
/// ```
/// use pathpat::config::Config;
/// use pathpat::CaseSensitivity;
///
/// let config = Config {
///     case_sensitivity: Some(CaseSensitivity::Insensitive),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_case_sensitivity(), CaseSensitivity::Insensitive);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Case sensitivity used for comparisons.
    pub case_sensitivity: Option<CaseSensitivity>,

    /// Width budget for detailed descriptions.
    pub max_width: Option<usize>,

    /// Whether descriptions include per-variable detail lines.
    pub detailed: Option<bool>,
}

impl Config {
    /// The case sensitivity to use, defaulting to the platform convention.
    #[must_use]
    pub fn effective_case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
            .unwrap_or(CaseSensitivity::SystemDefault)
    }

    /// The width budget to use, defaulting to [`DEFAULT_MAX_WIDTH`].
    #[must_use]
    pub fn effective_max_width(&self) -> usize {
        self.max_width.unwrap_or(DEFAULT_MAX_WIDTH)
    }

    /// Whether detailed output is enabled; defaults to `true`.
    #[must_use]
    pub fn effective_detailed(&self) -> bool {
        self.detailed.unwrap_or(true)
    }

    /// Merges `source` into `self`; set fields in `source` win.
    ///
    /// Sources are applied in order from lowest to highest precedence.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpat::config::Config;
    ///
    /// let mut low = Config { max_width: Some(60), ..Default::default() };
    /// let high = Config { max_width: Some(100), ..Default::default() };
    /// low.merge_from(&high);
    /// assert_eq!(low.max_width, Some(100));
    /// ```
    pub fn merge_from(&mut self, source: &Config) {
        if source.case_sensitivity.is_some() {
            self.case_sensitivity = source.case_sensitivity;
        }
        if source.max_width.is_some() {
            self.max_width = source.max_width;
        }
        if source.detailed.is_some() {
            self.detailed = source.detailed;
        }
    }
}
