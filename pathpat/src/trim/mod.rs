//! Decomposition strategies for unresolved batches.
//!
//! Each strategy takes an unresolved batch and either produces a
//! sub-pattern (constant and variable elements plus smaller unresolved
//! batches) or reports that it does not apply. Inapplicability is an
//! `Option::None`, never an error: "no common pattern" is valid data and
//! ultimately becomes a terminal string set.
//!
//! # Strategy priority
//!
//! Per unresolved string batch, first success wins:
//!
//! 1. [`trim_integer`] — maximal leading digit runs, all-or-nothing.
//! 2. [`trim_prefix`] — case-aware constant prefix (unless the batch's
//!    [`Skipper`] rules it out).
//! 3. [`trim_suffix`] — the same logic mirrored through reversal (unless
//!    ruled out).
//! 4. [`trim_split`] — split on the first character of a fixed list that
//!    every string contains.
//! 5. [`trim_substring`] — constant run at an arbitrary shared offset.
//!
//! Path batches try [`trim_common_root`] once, then convert to strings.
//!
//! The dispatch itself lives in [`Resolver`](crate::Resolver).

mod common_root;
mod integer;
mod prefix;
mod skipper;
mod split;
mod substring;

pub use common_root::trim_common_root;
pub use integer::trim_integer;
pub use prefix::{trim_prefix, trim_suffix};
pub use skipper::Skipper;
pub use split::{trim_split, SPLIT_CHARS};
pub use substring::trim_substring;
