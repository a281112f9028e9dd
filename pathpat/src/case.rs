//! Case sensitivity modes and the case-aware comparer.
//!
//! All character and string comparisons inside the decomposition algorithm
//! go through [`Comparer`], parameterized by a [`CaseSensitivity`] mode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Case sensitivity policy for comparisons.
///
/// `SystemDefault` resolves to the host filesystem convention: insensitive
/// on Windows, sensitive everywhere else.
///
/// # Examples
///
/// ```
/// use pathpat::CaseSensitivity;
///
/// assert_eq!(
///     CaseSensitivity::parse("insensitive").unwrap(),
///     CaseSensitivity::Insensitive
/// );
/// assert!(CaseSensitivity::parse("fuzzy").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
    /// Characters compare equal only when identical.
    Sensitive,
    /// Characters compare equal ignoring case.
    Insensitive,
    /// Use the host platform's filesystem convention.
    SystemDefault,
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensitive => write!(f, "sensitive"),
            Self::Insensitive => write!(f, "insensitive"),
            Self::SystemDefault => write!(f, "system-default"),
        }
    }
}

impl CaseSensitivity {
    /// Parses a case sensitivity mode from a string.
    ///
    /// Recognizes: "sensitive", "insensitive", "system-default" (and the
    /// shorthand "auto"), case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathpat::CaseSensitivity;
    ///
    /// assert_eq!(CaseSensitivity::parse("SENSITIVE").unwrap(), CaseSensitivity::Sensitive);
    /// assert_eq!(CaseSensitivity::parse("auto").unwrap(), CaseSensitivity::SystemDefault);
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            "system-default" | "auto" => Ok(Self::SystemDefault),
            _ => Err(format!("invalid case sensitivity mode: {s}")),
        }
    }

    /// Resolves `SystemDefault` to a concrete mode for the host platform.
    #[must_use]
    pub fn resolved(self) -> Self {
        match self {
            Self::SystemDefault => {
                if cfg!(windows) {
                    Self::Insensitive
                } else {
                    Self::Sensitive
                }
            }
            other => other,
        }
    }
}

/// Case-aware character and string equality.
///
/// # Examples
///
/// ```
/// use pathpat::{CaseSensitivity, Comparer};
///
/// let cmp = Comparer::new(CaseSensitivity::Insensitive);
/// assert!(cmp.chars_equal('A', 'a'));
/// assert!(cmp.strings_equal("DIR", "dir"));
///
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// assert!(!cmp.chars_equal('A', 'a'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Comparer {
    sensitive: bool,
}

impl Comparer {
    /// Creates a comparer for the given mode.
    ///
    /// `SystemDefault` is resolved to a concrete mode at construction.
    #[must_use]
    pub fn new(mode: CaseSensitivity) -> Self {
        Self {
            sensitive: mode.resolved() == CaseSensitivity::Sensitive,
        }
    }

    /// Returns `true` if this comparer distinguishes case.
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Compares two characters under the configured mode.
    #[must_use]
    pub fn chars_equal(&self, a: char, b: char) -> bool {
        if self.sensitive {
            a == b
        } else {
            a == b || a.to_lowercase().eq(b.to_lowercase())
        }
    }

    /// Compares two strings character-wise under the configured mode.
    #[must_use]
    pub fn strings_equal(&self, a: &str, b: &str) -> bool {
        let mut left = a.chars();
        let mut right = b.chars();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(l), Some(r)) if self.chars_equal(l, r) => {}
                _ => return false,
            }
        }
    }
}
