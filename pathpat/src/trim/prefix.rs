//! Constant prefix and suffix decomposition.

use crate::case::Comparer;
use crate::pattern::{Pattern, PatternElement};
use crate::trim::Skipper;

/// Peels the case-aware character-wise common leading prefix off a batch.
///
/// Comparison stops at the first mismatch or at the exhaustion of any
/// string; an empty prefix means the strategy does not apply. The constant
/// keeps the first string's spelling, which matters under case-insensitive
/// comparison.
///
/// The remainder batch is marked to skip left resolution: its first
/// characters disagree by construction (or some remainder is empty), so a
/// second prefix match cannot succeed.
///
/// # Examples
///
/// ```
/// use pathpat::trim::{trim_prefix, Skipper};
/// use pathpat::{CaseSensitivity, Comparer};
///
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// let values = vec!["img_a".to_string(), "img_b".to_string()];
/// let sub = trim_prefix(&values, Skipper::new(), &cmp).unwrap();
/// assert_eq!(sub.elements()[0], pathpat::PatternElement::Constant("img_".into()));
/// ```
#[must_use]
pub fn trim_prefix(values: &[String], skip: Skipper, comparer: &Comparer) -> Option<Pattern> {
    let first: Vec<char> = values.first()?.chars().collect();
    let mut prefix_len = first.len();

    for value in &values[1..] {
        let matched = first
            .iter()
            .zip(value.chars())
            .take_while(|(a, b)| comparer.chars_equal(**a, *b))
            .count();
        prefix_len = prefix_len.min(matched);
        if prefix_len == 0 {
            return None;
        }
    }
    if prefix_len == 0 {
        return None;
    }

    let prefix: String = first[..prefix_len].iter().collect();
    let remainders: Vec<String> = values
        .iter()
        .map(|v| v.chars().skip(prefix_len).collect())
        .collect();

    Some(Pattern::from_elements(vec![
        PatternElement::Constant(prefix),
        PatternElement::UnresolvedStrings {
            values: remainders,
            skip: Skipper {
                try_left: false,
                try_right: skip.try_right,
                min_split_index: skip.min_split_index,
            },
        },
    ]))
}

/// Peels the common constant suffix off a batch.
///
/// Implemented strictly by symmetry rather than duplicated logic: reverse
/// every string, run [`trim_prefix`] with a mirrored skip hint, then
/// reverse the resulting sub-pattern back (element order, element values,
/// and the remaining hints).
///
/// # Examples
///
/// ```
/// use pathpat::trim::{trim_suffix, Skipper};
/// use pathpat::{CaseSensitivity, Comparer};
///
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// let values = vec!["a.txt".to_string(), "b.txt".to_string()];
/// let sub = trim_suffix(&values, Skipper::new(), &cmp).unwrap();
/// let last = sub.elements().last().unwrap();
/// assert_eq!(*last, pathpat::PatternElement::Constant(".txt".into()));
/// ```
#[must_use]
pub fn trim_suffix(values: &[String], skip: Skipper, comparer: &Comparer) -> Option<Pattern> {
    let reversed: Vec<String> = values.iter().map(|v| v.chars().rev().collect()).collect();
    let mut sub = trim_prefix(&reversed, skip.mirrored(), comparer)?;
    sub.reverse();
    Some(sub)
}
