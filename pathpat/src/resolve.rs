//! The fixed-point driver over a pattern's elements.

use std::path::PathBuf;

use crate::case::{CaseSensitivity, Comparer};
use crate::pattern::{Pattern, PatternElement};
use crate::trim::{
    trim_common_root, trim_integer, trim_prefix, trim_split, trim_substring, trim_suffix, Skipper,
};

/// Drives repeated strategy application over a pattern to a fixed point.
///
/// The resolver scans elements left to right. A resolved element advances
/// the scan; an unresolved element is dispatched to the trim strategies and
/// replaced in place by the resulting sub-pattern's zero, one, or many
/// elements, rescanning at the same index so newly inserted elements are
/// immediately eligible.
///
/// Termination is guaranteed: every string replacement either strictly
/// reduces the total number of unresolved characters or converts the batch
/// to a terminal element, and a path batch converts to strings at most
/// once.
///
/// # Examples
///
/// ```
/// use pathpat::{CaseSensitivity, Pattern, Resolver};
///
/// let mut pattern = Pattern::from_strings(vec![
///     "img1.png".to_string(),
///     "img2.png".to_string(),
/// ]);
/// let resolver = Resolver::new(CaseSensitivity::Sensitive);
/// assert!(resolver.resolve(&mut pattern));
/// assert!(pattern.is_resolved());
///
/// // Resolving again is a no-op.
/// assert!(!resolver.resolve(&mut pattern));
/// ```
#[derive(Debug)]
pub struct Resolver {
    comparer: Comparer,
}

impl Resolver {
    /// Creates a resolver for the given case sensitivity mode.
    #[must_use]
    pub fn new(mode: CaseSensitivity) -> Self {
        Self {
            comparer: Comparer::new(mode),
        }
    }

    /// Returns the comparer in use.
    #[must_use]
    pub const fn comparer(&self) -> &Comparer {
        &self.comparer
    }

    /// Resolves the pattern in place until no unresolved element remains.
    ///
    /// Returns whether any replacement occurred; callers use this only as a
    /// diagnostic, never for control flow.
    pub fn resolve(&self, pattern: &mut Pattern) -> bool {
        let mut changed = false;
        let mut index = 0;
        while index < pattern.len() {
            let replacement = match &pattern.elements[index] {
                PatternElement::UnresolvedPaths(paths) => self.decompose_paths(paths),
                PatternElement::UnresolvedStrings { values, skip } => {
                    self.decompose_strings(values, *skip)
                }
                _ => {
                    index += 1;
                    continue;
                }
            };
            log::debug!(
                "replacing element {index} with {} element(s)",
                replacement.len()
            );
            pattern.splice(index, replacement);
            changed = true;
        }
        changed
    }

    /// Dispatches one path batch.
    ///
    /// Tries the shared-root strategy; once nothing is shared the batch is
    /// handed on to string decomposition as host-separator text.
    fn decompose_paths(&self, paths: &[PathBuf]) -> Pattern {
        if let Some(sub) = trim_common_root(paths, &self.comparer) {
            return sub;
        }
        log::debug!("no shared root across {} path(s)", paths.len());
        let values = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        Pattern::from_elements(vec![PatternElement::UnresolvedStrings {
            values,
            skip: Skipper::new(),
        }])
    }

    /// Dispatches one string batch through the strategy priority list.
    ///
    /// A batch whose values are all empty vanishes. A batch with a single
    /// distinct value (under the active comparer) is terminal immediately.
    /// Otherwise the first applicable strategy wins; if none applies the
    /// batch becomes a terminal string set, which always succeeds and is
    /// never retried.
    fn decompose_strings(&self, values: &[String], skip: Skipper) -> Pattern {
        if values.iter().all(String::is_empty) {
            return Pattern::empty();
        }
        if let [first, rest @ ..] = values {
            if rest.iter().all(|v| self.comparer.strings_equal(first, v)) {
                return Pattern::from_elements(vec![PatternElement::Strings(values.to_vec())]);
            }
        }
        if let Some(sub) = trim_integer(values, skip) {
            return sub;
        }
        if skip.try_left {
            if let Some(sub) = trim_prefix(values, skip, &self.comparer) {
                return sub;
            }
        }
        if skip.try_right {
            if let Some(sub) = trim_suffix(values, skip, &self.comparer) {
                return sub;
            }
        }
        if let Some(sub) = trim_split(values, skip) {
            return sub;
        }
        if let Some(sub) = trim_substring(values, skip, &self.comparer) {
            return sub;
        }
        Pattern::from_elements(vec![PatternElement::Strings(values.to_vec())])
    }
}
