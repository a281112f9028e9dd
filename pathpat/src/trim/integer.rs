//! Leading integer decomposition.

use crate::pattern::{Pattern, PatternElement};
use crate::trim::Skipper;

/// Consumes the maximal leading run of ASCII digits from every string.
///
/// All-or-nothing: if any string does not start with a digit, the whole
/// batch is left alone. On success the batch becomes
/// `[Integers(runs), UnresolvedStrings(remainders)]`.
///
/// This strategy ignores the left-edge skip hint: a batch whose constant
/// prefix was already peeled can still open with digits (the remainder
/// after `Constant("PREFIX_")` does exactly that), and digit runs are never
/// produced by a prefix match, so retrying is never redundant. The
/// remainder's left edge is fresh again.
///
/// # Examples
///
/// ```
/// use pathpat::trim::{trim_integer, Skipper};
///
/// let values = vec!["12a".to_string(), "7b".to_string()];
/// let sub = trim_integer(&values, Skipper::new()).unwrap();
/// assert_eq!(sub.len(), 2);
///
/// let values = vec!["12a".to_string(), "b".to_string()];
/// assert!(trim_integer(&values, Skipper::new()).is_none());
/// ```
#[must_use]
pub fn trim_integer(values: &[String], skip: Skipper) -> Option<Pattern> {
    let mut runs = Vec::with_capacity(values.len());
    let mut remainders = Vec::with_capacity(values.len());

    for value in values {
        let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        // Digits are ASCII, so the char count equals the byte offset.
        remainders.push(value[digits.len()..].to_string());
        runs.push(digits);
    }

    Some(Pattern::from_elements(vec![
        PatternElement::Integers(runs),
        PatternElement::UnresolvedStrings {
            values: remainders,
            skip: Skipper {
                try_left: true,
                try_right: skip.try_right,
                min_split_index: skip.min_split_index,
            },
        },
    ]))
}
