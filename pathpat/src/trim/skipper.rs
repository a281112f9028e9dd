//! Per-lineage strategy-attempt memoization.

/// Decomposition hint carried by an unresolved string batch.
///
/// When a batch is derived from a parent (by a prefix match, a split, or a
/// constant substring), some strategies are already known to fail for it:
/// the edge it shares with its parent was just examined. The hint records
/// that knowledge so later rounds never retry a strategy already ruled out
/// for the lineage, which both avoids redundant recombination and bounds
/// total work.
///
/// The hint is an immutable value threaded through the recursive
/// decomposition; derived batches get a fresh copy, nothing is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipper {
    /// Whether a constant-prefix match from the left may still succeed.
    pub try_left: bool,
    /// Whether a constant-prefix match from the right may still succeed.
    pub try_right: bool,
    /// Lowest index into the split-character list not yet ruled out.
    pub min_split_index: usize,
}

impl Skipper {
    /// Hint for a fresh batch: everything is worth trying.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            try_left: true,
            try_right: true,
            min_split_index: 0,
        }
    }

    /// Swaps the left/right hints.
    ///
    /// Used by the symmetric right-prefix combinator, which runs the left
    /// logic on reversed strings: inside the reversed world, "left" means
    /// the original right edge.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            try_left: self.try_right,
            try_right: self.try_left,
            min_split_index: self.min_split_index,
        }
    }
}

impl Default for Skipper {
    fn default() -> Self {
        Self::new()
    }
}
