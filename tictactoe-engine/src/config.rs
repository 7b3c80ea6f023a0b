//! Search configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for a [`Searcher`](crate::Searcher).
///
/// The depth budget is always an explicit field. On a 3×3 board a budget of
/// 9 plies searches every game to its end; on 5×5 exhaustive search is far
/// outside interactive latency, so the preset bounds it and the leaf value
/// falls back to 0 for undecided positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Board side length (3..=5).
    pub size: u8,
    /// Consecutive cells required to win.
    pub win_len: u8,
    /// Maximum lookahead in plies.
    pub max_depth: u8,
    /// Enable alpha-beta cutoffs. Disabling never changes the result, only
    /// the amount of work; it exists so tests can compare against the plain
    /// minimax answer.
    pub prune: bool,
}

impl SearchConfig {
    /// The classic game: 3×3, three in a row, searched to the end.
    pub fn classic() -> SearchConfig {
        SearchConfig {
            size: 3,
            win_len: 3,
            max_depth: 9,
            prune: true,
        }
    }

    /// The extended game: 5×5, four in a row, bounded lookahead.
    pub fn extended() -> SearchConfig {
        SearchConfig {
            size: 5,
            win_len: 4,
            max_depth: 4,
            prune: true,
        }
    }

    /// Override the depth budget.
    pub fn with_depth(mut self, max_depth: u8) -> SearchConfig {
        self.max_depth = max_depth;
        self
    }

    /// Disable alpha-beta cutoffs.
    pub fn without_pruning(mut self) -> SearchConfig {
        self.prune = false;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::classic()
    }
}
