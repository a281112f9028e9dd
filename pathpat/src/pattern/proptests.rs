//! Property-based tests for pattern resolution.
//!
//! These tests pin the two load-bearing invariants of the decomposition:
//! reconstruction and idempotence.

use proptest::prelude::*;

use crate::case::CaseSensitivity;
use crate::pattern::Pattern;
use crate::resolve::Resolver;

// Strategy for batches of path-like strings sharing some structure
fn structured_strings() -> impl Strategy<Value = Vec<String>> {
    (
        "[a-z]{0,6}",
        prop::collection::vec(("[0-9]{1,4}", "[a-zA-Z]{0,5}"), 1..=6),
        "[a-z_. -]{0,6}",
    )
        .prop_map(|(prefix, middles, suffix)| {
            middles
                .into_iter()
                .map(|(digits, word)| format!("{prefix}{digits}{word}{suffix}"))
                .collect()
        })
}

// Strategy for fully arbitrary batches
fn arbitrary_strings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_/. -]{0,12}", 1..=6)
}

proptest! {
    /// Concatenating the per-element value at index `i` reproduces input `i`
    /// exactly, for every input.
    #[test]
    fn reconstruction_exact(values in structured_strings()) {
        let mut pattern = Pattern::from_strings(values.clone());
        Resolver::new(CaseSensitivity::Sensitive).resolve(&mut pattern);
        prop_assert!(pattern.is_resolved());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(pattern.reconstruct(i).unwrap(), value.clone());
        }
    }

    /// The same holds for arbitrary inputs with no imposed structure.
    #[test]
    fn reconstruction_arbitrary(values in arbitrary_strings()) {
        let mut pattern = Pattern::from_strings(values.clone());
        Resolver::new(CaseSensitivity::Sensitive).resolve(&mut pattern);
        prop_assert!(pattern.is_resolved());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(pattern.reconstruct(i).unwrap(), value.clone());
        }
    }

    /// Resolving an already-resolved pattern changes nothing and reports
    /// no replacement.
    #[test]
    fn resolution_idempotent(values in arbitrary_strings()) {
        let resolver = Resolver::new(CaseSensitivity::Sensitive);
        let mut pattern = Pattern::from_strings(values);
        resolver.resolve(&mut pattern);
        let settled = pattern.clone();
        prop_assert!(!resolver.resolve(&mut pattern));
        prop_assert_eq!(pattern, settled);
    }
}
