//! Constant substring decomposition at an arbitrary shared offset.

use crate::case::Comparer;
use crate::pattern::{Pattern, PatternElement};
use crate::trim::Skipper;

/// Finds the first index range where all strings agree character-for-character
/// at the same offset.
///
/// An agreement mask over the common length is computed by ANDing a
/// per-position match test against the first string across all other
/// strings; the first maximal contiguous true-run becomes a constant,
/// flanked by unresolved left and right batches. `None` if no position
/// agrees.
///
/// # Examples
///
/// ```
/// use pathpat::trim::{trim_substring, Skipper};
/// use pathpat::{CaseSensitivity, Comparer};
///
/// let cmp = Comparer::new(CaseSensitivity::Sensitive);
/// let values = vec!["xMIDy".to_string(), "aMIDb".to_string()];
/// let sub = trim_substring(&values, Skipper::new(), &cmp).unwrap();
/// assert_eq!(sub.elements()[1], pathpat::PatternElement::Constant("MID".into()));
/// ```
#[must_use]
pub fn trim_substring(values: &[String], skip: Skipper, comparer: &Comparer) -> Option<Pattern> {
    let chars: Vec<Vec<char>> = values.iter().map(|v| v.chars().collect()).collect();
    let first = chars.first()?;
    let min_len = chars.iter().map(Vec::len).min()?;
    if min_len == 0 {
        return None;
    }

    let agrees = |i: usize| {
        chars[1..]
            .iter()
            .all(|other| comparer.chars_equal(other[i], first[i]))
    };

    // First maximal contiguous run of agreement.
    let start = (0..min_len).find(|&i| agrees(i))?;
    let mut end = start + 1;
    while end < min_len && agrees(end) {
        end += 1;
    }

    let constant: String = first[start..end].iter().collect();
    let lefts: Vec<String> = chars.iter().map(|cs| cs[..start].iter().collect()).collect();
    let rights: Vec<String> = chars.iter().map(|cs| cs[end..].iter().collect()).collect();

    Some(Pattern::from_elements(vec![
        PatternElement::UnresolvedStrings {
            values: lefts,
            skip: Skipper {
                try_left: false,
                try_right: true,
                min_split_index: skip.min_split_index,
            },
        },
        PatternElement::Constant(constant),
        PatternElement::UnresolvedStrings {
            values: rights,
            skip: Skipper {
                try_left: true,
                try_right: false,
                min_split_index: skip.min_split_index,
            },
        },
    ]))
}
