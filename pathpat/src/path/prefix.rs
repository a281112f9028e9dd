//! Longest common leading directory-segment run across a set of paths.

use std::path::PathBuf;

use crate::case::Comparer;
use crate::error::{Error, Result};
use crate::path::segment::directory_segments;

/// Computes the longest common leading segment list across one or more
/// paths under the given comparer.
///
/// The run is seeded with the first path's directory segments (the final
/// filename component never participates) and intersected against each
/// subsequent path's directory segments, truncating at the first
/// mismatching index. The returned segments are taken from the first path,
/// which matters under case-insensitive comparison.
///
/// Paths that share nothing yield an empty prefix; that is valid data, not
/// an error.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for a zero-length path list, and
/// propagates [`Error::InvalidPath`] when a path consists only of a root.
///
/// # Examples
///
/// ```
/// use pathpat::{CaseSensitivity, Comparer};
/// use pathpat::path::common_prefix;
/// use std::path::PathBuf;
///
/// let paths = vec![
///     PathBuf::from("base/sub/one.txt"),
///     PathBuf::from("base/sub/two.txt"),
///     PathBuf::from("base/sub/deep/three.txt"),
/// ];
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// assert_eq!(common_prefix(&paths, &cmp).unwrap(), vec!["base", "sub"]);
/// ```
pub fn common_prefix(paths: &[PathBuf], comparer: &Comparer) -> Result<Vec<String>> {
    let first = paths.first().ok_or(Error::EmptyInput)?;
    let mut prefix = directory_segments(first)?;

    for path in &paths[1..] {
        if prefix.is_empty() {
            break;
        }
        let dirs = directory_segments(path)?;
        let matched = prefix
            .iter()
            .zip(dirs.iter())
            .take_while(|(a, b)| comparer.strings_equal(a, b))
            .count();
        prefix.truncate(matched);
    }

    Ok(prefix)
}
