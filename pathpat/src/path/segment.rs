//! Path segmentation.
//!
//! A path is decomposed into an ordered list of textual segments. The root
//! is included first when present: a single-character POSIX root is one
//! segment, a drive-letter root is two segments (the letter, then the
//! separator).

use std::path::{Component, Path, MAIN_SEPARATOR};

use crate::error::{Error, Result};

/// Decomposes a path into its ordered textual segments.
///
/// The root, if present, comes first. `/a/b` yields `["/", "a", "b"]`; on
/// Windows `C:\a` yields `["C:", "\\", "a"]`.
///
/// # Examples
///
/// ```
/// use pathpat::path::segments;
/// use std::path::Path;
///
/// let segs = segments(Path::new("a/b/c.txt"));
/// assert_eq!(segs, vec!["a", "b", "c.txt"]);
/// ```
#[must_use]
pub fn segments(path: &Path) -> Vec<String> {
    let mut out = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                out.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => out.push(MAIN_SEPARATOR.to_string()),
            Component::CurDir => out.push(".".to_string()),
            Component::ParentDir => out.push("..".to_string()),
            Component::Normal(name) => out.push(name.to_string_lossy().into_owned()),
        }
    }
    out
}

/// Returns `true` if a segment is part of the path root (a separator or a
/// drive-letter prefix) rather than a named component.
#[must_use]
pub fn is_root_segment(segment: &str) -> bool {
    segment == "/" || segment == "\\" || segment.ends_with(':')
}

/// Returns the directory segments of a path: all segments except the final
/// filename component, with the root (if any) included first.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is empty or consists only of
/// a root, since such a path has no directory/filename structure to query.
///
/// # Examples
///
/// ```
/// use pathpat::path::directory_segments;
/// use std::path::Path;
///
/// let dirs = directory_segments(Path::new("a/b/c.txt")).unwrap();
/// assert_eq!(dirs, vec!["a", "b"]);
///
/// // A bare filename has no directories
/// assert!(directory_segments(Path::new("c.txt")).unwrap().is_empty());
///
/// // A bare root cannot be queried
/// assert!(directory_segments(Path::new("/")).is_err());
/// ```
pub fn directory_segments(path: &Path) -> Result<Vec<String>> {
    let mut segs = segments(path);
    if segs.is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }
    if segs.iter().all(|s| is_root_segment(s)) {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path has no components besides its root".to_string(),
        });
    }
    // Drop the final named component (the filename).
    segs.pop();
    Ok(segs)
}

/// Joins segments back into a single host-separator string.
///
/// The inverse of [`segments`] for relative paths; used when a decomposed
/// suffix is handed on as a plain string.
#[must_use]
pub fn join(segments: &[String]) -> String {
    segments.join(&MAIN_SEPARATOR.to_string())
}
