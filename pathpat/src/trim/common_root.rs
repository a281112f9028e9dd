//! Shared directory root decomposition for path batches.

use std::path::PathBuf;

use crate::case::Comparer;
use crate::path::{common_prefix, join, segments};
use crate::pattern::{Pattern, PatternElement};

/// Returns `true` for a bare separator segment produced by a path root.
fn is_separator_segment(segment: &str) -> bool {
    segment == "/" || segment == "\\"
}

/// Peels the shared leading directory segments off a path batch.
///
/// The shared run (computed over directory segments only; filenames never
/// participate) becomes alternating constant and separator elements. A
/// drive-letter segment is a constant immediately followed by its root
/// separator segment. The per-path leftovers remain a single unresolved
/// path batch; a second application finds nothing shared and the batch is
/// handed on to string decomposition.
///
/// `None` when the paths share no leading directories, and also when a
/// path cannot be queried for directories at all (a bare root): strategies
/// report inapplicability, they do not fail.
///
/// # Examples
///
/// ```
/// use pathpat::trim::trim_common_root;
/// use pathpat::{CaseSensitivity, Comparer, PatternElement};
/// use std::path::PathBuf;
///
/// let paths = vec![PathBuf::from("base/a.txt"), PathBuf::from("base/b.txt")];
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// let sub = trim_common_root(&paths, &cmp).unwrap();
/// assert_eq!(sub.elements()[0], PatternElement::Constant("base".into()));
/// assert_eq!(sub.elements()[1], PatternElement::Separator);
/// ```
#[must_use]
pub fn trim_common_root(paths: &[PathBuf], comparer: &Comparer) -> Option<Pattern> {
    let prefix = common_prefix(paths, comparer).ok()?;
    if prefix.is_empty() {
        return None;
    }

    let mut elements = Vec::new();
    for (i, segment) in prefix.iter().enumerate() {
        if is_separator_segment(segment) {
            elements.push(PatternElement::Separator);
        } else {
            elements.push(PatternElement::Constant(segment.clone()));
            // The trailing separator, unless the next segment is the root
            // separator itself (drive letter case).
            let next_is_separator = prefix
                .get(i + 1)
                .is_some_and(|s| is_separator_segment(s));
            if !next_is_separator {
                elements.push(PatternElement::Separator);
            }
        }
    }

    let suffixes: Vec<PathBuf> = paths
        .iter()
        .map(|path| {
            let segs = segments(path);
            PathBuf::from(join(&segs[prefix.len()..]))
        })
        .collect();
    elements.push(PatternElement::UnresolvedPaths(suffixes));

    Some(Pattern::from_elements(elements))
}
