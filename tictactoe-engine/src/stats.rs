//! Search statistics tracking.

/// Counters accumulated over a single [`best_move`](crate::Searcher::best_move) call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    /// Positions visited by the recursive search.
    pub nodes: u64,
    /// Sibling moves skipped by alpha-beta cutoffs.
    pub branches_pruned: u64,
}
