//! Public entry points for pattern inference.

use std::path::PathBuf;

use crate::case::CaseSensitivity;
use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::resolve::Resolver;

/// Infers the pattern common to a set of paths.
///
/// Shared leading directories are peeled into constant segments first, the
/// per-path leftovers are then decomposed as strings. Every call builds
/// independent state, so concurrent calls with disjoint inputs need no
/// synchronization.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty path list. "No common
/// structure" is not an error: the result degenerates to a single variable
/// element.
///
/// # Examples
///
/// ```
/// use pathpat::{find_pattern_in_paths, CaseSensitivity};
/// use std::path::PathBuf;
///
/// let paths = vec![
///     PathBuf::from("shots/scene_12_take1.raw"),
///     PathBuf::from("shots/scene_31_take2.mov"),
/// ];
/// let pattern = find_pattern_in_paths(&paths, CaseSensitivity::Sensitive).unwrap();
/// # #[cfg(unix)]
/// assert_eq!(pattern.describe_short(), "shots/scene_${0}_take${1}.${2}");
/// ```
pub fn find_pattern_in_paths(paths: &[PathBuf], mode: CaseSensitivity) -> Result<Pattern> {
    if paths.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut pattern = Pattern::from_paths(paths.to_vec());
    Resolver::new(mode).resolve(&mut pattern);
    Ok(pattern)
}

/// Infers the pattern common to a set of raw strings.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty value list.
///
/// # Examples
///
/// ```
/// use pathpat::{find_pattern_in_strings, CaseSensitivity};
///
/// let values = vec!["run-07".to_string(), "run-23".to_string()];
/// let pattern = find_pattern_in_strings(&values, CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(pattern.describe_short(), "run-${0}");
/// ```
pub fn find_pattern_in_strings(values: &[String], mode: CaseSensitivity) -> Result<Pattern> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut pattern = Pattern::from_strings(values.to_vec());
    Resolver::new(mode).resolve(&mut pattern);
    Ok(pattern)
}
