//! Rendering of resolved patterns to bounded-width text.
//!
//! The short form is a single line where each variable element appears as a
//! `${i}` placeholder, `i` assigned 0-based in order of first appearance.
//! The detailed form appends one line per variable element summarizing its
//! values through a [`FrequencyMap`], degrading gracefully when the full
//! listing does not fit the width budget.

use std::cmp::Ordering;
use std::fmt;
use std::path::MAIN_SEPARATOR;

use crate::frequency::FrequencyMap;
use crate::pattern::{Pattern, PatternElement};

const ELLIPSIS: &str = "...";

/// Truncates `text` to `width` characters, marking the cut with an ellipsis.
fn abbreviate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// A decimal digit run in canonical form (no leading zeros).
///
/// Ordering is numeric: shorter runs sort first, equal lengths compare
/// lexicographically. Successor arithmetic is done on the digit string, so
/// runs of any length are handled without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        let trimmed = run.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// The next integer, as a digit string.
    fn succ(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        let mut i = digits.len();
        while i > 0 {
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                return Self(String::from_utf8_lossy(&digits).into_owned());
            }
        }
        digits.insert(0, b'1');
        Self(String::from_utf8_lossy(&digits).into_owned())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the resolved pattern as a single line.
pub(crate) fn describe_short(pattern: &Pattern) -> String {
    assert!(
        pattern.is_resolved(),
        "cannot describe a pattern with unresolved elements"
    );
    let mut out = String::new();
    let mut var = 0;
    for element in pattern.elements() {
        match element {
            PatternElement::Constant(text) => out.push_str(text),
            PatternElement::Separator => out.push(MAIN_SEPARATOR),
            PatternElement::Integers(_) | PatternElement::Strings(_) => {
                out.push_str(&format!("${{{var}}}"));
                var += 1;
            }
            PatternElement::UnresolvedPaths(_) | PatternElement::UnresolvedStrings { .. } => {
                unreachable!("resolved pattern cannot contain unresolved elements")
            }
        }
    }
    out
}

/// Renders the resolved pattern with one detail line per variable element,
/// every line held within `max_width` characters.
pub(crate) fn describe_detailed(pattern: &Pattern, max_width: usize) -> String {
    let mut lines = vec![abbreviate(&describe_short(pattern), max_width)];
    let mut var = 0;
    for element in pattern.elements() {
        match element {
            PatternElement::Integers(values) => {
                let line = format!("${{{var}}} = {}", integer_summary(values));
                lines.push(abbreviate(&line, max_width));
                var += 1;
            }
            PatternElement::Strings(values) => {
                lines.push(string_line(var, values, max_width));
                var += 1;
            }
            _ => {}
        }
    }
    lines.join("\n")
}

/// Summarizes an integer element's values.
///
/// A duplicate-free set with no gap between its minimum and maximum renders
/// as a sequence; anything else renders as a count between bounds.
fn integer_summary(values: &[String]) -> String {
    let freq: FrequencyMap<Digits> = values.iter().map(|v| Digits::new(v)).collect();
    let (Some(min), Some(max)) = (freq.min(), freq.max()) else {
        return "0 unique integers".to_string();
    };
    if freq.unique_len() == freq.total() && is_contiguous(&freq) {
        format!("an integer sequence from {min} to {max} inclusive")
    } else {
        format!(
            "{} unique integers between {min} and {max} inclusive",
            freq.unique_len()
        )
    }
}

/// Returns `true` if every adjacent pair of distinct values differs by one.
fn is_contiguous(freq: &FrequencyMap<Digits>) -> bool {
    let mut keys = freq.keys();
    let Some(mut previous) = keys.next() else {
        return true;
    };
    for key in keys {
        if *key != previous.succ() {
            return false;
        }
        previous = key;
    }
    true
}

/// Builds the detail line for a string element within the width budget.
fn string_line(var: usize, values: &[String], max_width: usize) -> String {
    let freq: FrequencyMap<&String> = values.iter().collect();
    let entries: Vec<String> = freq
        .by_frequency()
        .iter()
        .map(|(value, count)| format!("\"{value}\" ({count})"))
        .collect();

    let prefix = format!("${{{var}}} = ");
    let full = format!("{prefix}{}", entries.join(" | "));
    if full.chars().count() <= max_width {
        return full;
    }

    // Too narrow for the full listing: fall back to a count plus as many
    // examples as fit, most frequent first.
    let mut out = format!("{prefix}{} unique strings", freq.unique_len());
    if out.chars().count() > max_width {
        return abbreviate(&out, max_width);
    }
    for (i, entry) in entries.iter().enumerate() {
        let addition = if i == 0 {
            format!(" e.g. {entry}")
        } else {
            format!(", {entry}")
        };
        if out.chars().count() + addition.chars().count() > max_width {
            break;
        }
        out.push_str(&addition);
    }
    out
}
