//! The closed set of pattern element variants.

use std::path::{PathBuf, MAIN_SEPARATOR};

use crate::trim::Skipper;

/// One element of a [`Pattern`](crate::Pattern).
///
/// A resolved element is a final pattern atom: constant text, the host
/// directory separator, or a set of per-input variable values. Unresolved
/// elements carry raw batches awaiting further decomposition.
///
/// Variable elements store one value per original input, duplicates
/// included; deduplication happens at render time through a
/// [`FrequencyMap`](crate::FrequencyMap). That is what makes the
/// reconstruction invariant hold: concatenating every element's value at
/// index `i` reproduces input `i` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    /// Text identical across all inputs.
    Constant(String),
    /// The host path separator, constant across all inputs.
    Separator,
    /// A decimal-digit run per input.
    Integers(Vec<String>),
    /// An arbitrary string per input.
    Strings(Vec<String>),
    /// A batch of paths not yet decomposed.
    UnresolvedPaths(Vec<PathBuf>),
    /// A batch of strings not yet decomposed.
    UnresolvedStrings {
        /// One raw string per input.
        values: Vec<String>,
        /// Strategies already ruled out for this batch's lineage.
        skip: Skipper,
    },
}

impl PatternElement {
    /// Returns `true` if this element is a final pattern atom.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(
            self,
            Self::UnresolvedPaths(_) | Self::UnresolvedStrings { .. }
        )
    }

    /// Returns `true` if this element varies across inputs.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Integers(_) | Self::Strings(_))
    }

    /// Returns the text this element contributes to input `index`.
    ///
    /// `None` for unresolved elements and for out-of-range indices of
    /// variable elements. Constant elements contribute the same text for
    /// every index.
    #[must_use]
    pub fn rendered_value(&self, index: usize) -> Option<String> {
        match self {
            Self::Constant(text) => Some(text.clone()),
            Self::Separator => Some(MAIN_SEPARATOR.to_string()),
            Self::Integers(values) | Self::Strings(values) => values.get(index).cloned(),
            Self::UnresolvedPaths(_) | Self::UnresolvedStrings { .. } => None,
        }
    }

    /// Reverses this element's internal values character-wise.
    ///
    /// Support for the symmetric right-prefix combinator; see
    /// [`Pattern::reverse`](crate::Pattern). Unresolved string batches also
    /// mirror their skip hint, since their notion of left and right flips
    /// with the text. Path batches never occur inside reversed sub-patterns
    /// and are left untouched.
    pub(crate) fn reverse(&mut self) {
        fn rev(s: &mut String) {
            *s = s.chars().rev().collect();
        }
        match self {
            Self::Constant(text) => rev(text),
            Self::Separator | Self::UnresolvedPaths(_) => {}
            Self::Integers(values) | Self::Strings(values) => values.iter_mut().for_each(rev),
            Self::UnresolvedStrings { values, skip } => {
                values.iter_mut().for_each(rev);
                *skip = skip.mirrored();
            }
        }
    }
}
