//! Decomposition by splitting on a shared character.

use std::path::MAIN_SEPARATOR;

use crate::pattern::{Pattern, PatternElement};
use crate::trim::Skipper;

/// Characters tried as split points, in priority order.
///
/// The host path separator is tried first, then the common word
/// separators.
pub const SPLIT_CHARS: [char; 4] = [MAIN_SEPARATOR, '_', '-', ' '];

/// Splits every string at the first occurrence of a shared character.
///
/// Candidates come from [`SPLIT_CHARS`], starting at the batch's
/// `min_split_index`; a candidate succeeds only if *every* string contains
/// it. The split character becomes a [`PatternElement::Separator`] when it
/// is the host path separator, a constant otherwise.
///
/// Derived batches record what the split just established: the outer edge
/// of each side is unchanged from the parent (so the matching prefix
/// direction stays ruled out), the inner edge is fresh, and the left side
/// can no longer contain the split character at all while the right side
/// may.
///
/// # Examples
///
/// ```
/// use pathpat::trim::{trim_split, Skipper};
///
/// let values = vec!["a_b".to_string(), "c_d".to_string()];
/// let sub = trim_split(&values, Skipper::new()).unwrap();
/// assert_eq!(sub.len(), 3);
/// assert_eq!(sub.elements()[1], pathpat::PatternElement::Constant("_".into()));
/// ```
#[must_use]
pub fn trim_split(values: &[String], skip: Skipper) -> Option<Pattern> {
    for (index, c) in SPLIT_CHARS
        .iter()
        .enumerate()
        .skip(skip.min_split_index)
    {
        if !values.iter().all(|v| v.contains(*c)) {
            continue;
        }

        let mut lefts = Vec::with_capacity(values.len());
        let mut rights = Vec::with_capacity(values.len());
        for value in values {
            let pos = value.find(*c)?;
            lefts.push(value[..pos].to_string());
            rights.push(value[pos + c.len_utf8()..].to_string());
        }

        let split_element = if *c == MAIN_SEPARATOR {
            PatternElement::Separator
        } else {
            PatternElement::Constant(c.to_string())
        };

        return Some(Pattern::from_elements(vec![
            PatternElement::UnresolvedStrings {
                values: lefts,
                skip: Skipper {
                    try_left: false,
                    try_right: true,
                    min_split_index: index + 1,
                },
            },
            split_element,
            PatternElement::UnresolvedStrings {
                values: rights,
                skip: Skipper {
                    try_left: true,
                    try_right: false,
                    min_split_index: index,
                },
            },
        ]));
    }
    None
}
