//! The pattern sequence type.
//!
//! A [`Pattern`] is an ordered sequence of [`PatternElement`]s summarizing
//! the commonality and variation across a set of input strings or paths. It
//! is seeded with a single unresolved element, mutated in place by the
//! [`Resolver`](crate::Resolver) until no unresolved element remains, and
//! treated as immutable from then on.

mod element;

#[cfg(test)]
mod proptests;

pub use element::PatternElement;

use std::path::PathBuf;

use crate::trim::Skipper;

/// An ordered sequence of pattern elements.
///
/// After resolution the invariant holds that for every original input
/// string, concatenating each element's per-index rendered value reproduces
/// that string exactly (under case-sensitive comparison; case-insensitive
/// constants keep the first input's spelling).
///
/// # Examples
///
/// ```
/// use pathpat::{find_pattern_in_strings, CaseSensitivity};
///
/// let values = vec!["alpha_1".to_string(), "beta_2".to_string()];
/// let pattern = find_pattern_in_strings(&values, CaseSensitivity::Sensitive).unwrap();
/// assert_eq!(pattern.describe_short(), "${0}_${1}");
/// assert_eq!(pattern.reconstruct(0).unwrap(), "alpha_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub(crate) elements: Vec<PatternElement>,
}

impl Pattern {
    /// Creates a pattern seeded with a single unresolved path batch.
    #[must_use]
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            elements: vec![PatternElement::UnresolvedPaths(paths)],
        }
    }

    /// Creates a pattern seeded with a single unresolved string batch.
    #[must_use]
    pub fn from_strings(values: Vec<String>) -> Self {
        Self {
            elements: vec![PatternElement::UnresolvedStrings {
                values,
                skip: Skipper::new(),
            }],
        }
    }

    /// Creates a pattern directly from elements.
    pub(crate) fn from_elements(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    /// An empty pattern; replacing an element with it removes the element.
    pub(crate) fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the elements in order.
    #[must_use]
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the pattern has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if every element is a final pattern atom.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.elements.iter().all(PatternElement::is_resolved)
    }

    /// Reconstructs the original input at `index` by concatenating every
    /// element's rendered value.
    ///
    /// Returns `None` if the pattern still contains unresolved elements or
    /// if `index` is out of range for a variable element. A pattern with no
    /// variable elements renders the same text for every index.
    #[must_use]
    pub fn reconstruct(&self, index: usize) -> Option<String> {
        let mut out = String::new();
        for element in &self.elements {
            out.push_str(&element.rendered_value(index)?);
        }
        Some(out)
    }

    /// Renders the resolved pattern as a single line.
    ///
    /// Constants render their text, separators the host path separator, and
    /// each variable element a `${i}` placeholder with `i` assigned 0-based
    /// left to right by first appearance.
    ///
    /// # Panics
    ///
    /// Panics if the pattern still contains unresolved elements; rendering
    /// an unresolved pattern is a programming error, not a recoverable
    /// condition.
    #[must_use]
    pub fn describe_short(&self) -> String {
        crate::describe::describe_short(self)
    }

    /// Renders the resolved pattern with one detail line per variable
    /// element, every line held within `max_width` characters.
    ///
    /// # Panics
    ///
    /// Panics if the pattern still contains unresolved elements.
    #[must_use]
    pub fn describe_detailed(&self, max_width: usize) -> String {
        crate::describe::describe_detailed(self, max_width)
    }

    /// Replaces the element at `index` with the elements of `replacement`.
    ///
    /// The replacement may contribute zero, one, or many elements; the
    /// resolver rescans from the same index afterwards.
    pub(crate) fn splice(&mut self, index: usize, replacement: Pattern) {
        self.elements.splice(index..=index, replacement.elements);
    }

    /// Reverses the pattern: element order and each element's values.
    ///
    /// This supports resolving constant suffixes by symmetry: reverse every
    /// string, run the left-prefix logic, then reverse the resulting
    /// sub-pattern back.
    pub(crate) fn reverse(&mut self) {
        self.elements.reverse();
        for element in &mut self.elements {
            element.reverse();
        }
    }
}
