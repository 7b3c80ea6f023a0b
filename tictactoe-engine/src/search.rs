//! Minimax search with optional alpha-beta pruning.
//!
//! The searcher simulates moves directly on the caller's board and reverts
//! each one before trying the next, so a completed search leaves the board
//! byte-identical to its input. Win scores are shaped by depth: a win found
//! at ply d is worth `WIN_SCORE - d`, so the engine takes the fastest win
//! available and, when losing is forced, holds out as long as possible.

use thiserror::Error;
use tracing::{debug, trace};

use tictactoe_core::{Board, BoardError, Mark, Outcome, Pos, WinLines};

use crate::config::SearchConfig;
use crate::stats::SearchStats;

/// Base value of a win. Larger than any reachable depth, so that a shaped
/// win score always outranks a draw and a nearer win outranks a farther one.
pub const WIN_SCORE: i32 = 1_000;

/// Search failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `best_move` was called on a board with no empty cell. The caller
    /// should have detected the finished game before asking for a move.
    #[error("no legal moves: the board is full")]
    NoLegalMoves,
    /// The configuration was rejected by the core rules.
    #[error(transparent)]
    Config(#[from] BoardError),
}

/// A chosen move and the score of the line of play behind it.
///
/// Positive scores favor the side the search was asked to move, negative
/// scores favor its opponent, zero is neutral or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
    pub pos: Pos,
    pub score: i32,
}

/// Minimax searcher over a fixed rule set.
///
/// Holds the precomputed [`WinLines`] for its configuration; construction
/// fails fast on unsupported size/run-length combinations so that a bad
/// configuration never surfaces mid-search.
pub struct Searcher {
    lines: WinLines,
    max_depth: u8,
    prune: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Build a searcher for the given configuration.
    pub fn new(config: SearchConfig) -> Result<Searcher, SearchError> {
        let lines = WinLines::new(config.size, config.win_len)?;
        Ok(Searcher {
            lines,
            max_depth: config.max_depth,
            prune: config.prune,
            stats: SearchStats::default(),
        })
    }

    /// The rule set this searcher plays by.
    pub fn lines(&self) -> &WinLines {
        &self.lines
    }

    /// Counters from the most recent [`Searcher::best_move`] call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the best move for `side` on the given board.
    ///
    /// Root moves are tried in row-major order and ties keep the first
    /// move encountered, so results are reproducible. The board is mutated
    /// during the search but restored before returning.
    ///
    /// Returns [`SearchError::NoLegalMoves`] on a full board.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        side: Mark,
    ) -> Result<SearchResult, SearchError> {
        self.stats = SearchStats::default();
        let before = board.to_bits();

        let moves: Vec<Pos> = board.empty_positions().collect();
        let mut best: Option<SearchResult> = None;
        let mut alpha = -WIN_SCORE;
        let beta = WIN_SCORE;

        for pos in moves {
            board.put(pos, side);
            let score = self.minimax(board, side.opponent(), side, 1, alpha, beta);
            board.clear(pos);
            trace!(row = pos.row, col = pos.col, score, "root move");

            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult { pos, score });
            }
            alpha = alpha.max(score);
        }

        debug_assert_eq!(board.to_bits(), before);

        let result = best.ok_or(SearchError::NoLegalMoves)?;
        debug!(
            row = result.pos.row,
            col = result.pos.col,
            score = result.score,
            nodes = self.stats.nodes,
            pruned = self.stats.branches_pruned,
            "search complete"
        );
        Ok(result)
    }

    /// One ply of minimax. `to_move` places the next mark; `root` is the
    /// side the search maximizes for.
    ///
    /// Terminal checks run in a fixed order: a decided win first (shaped by
    /// depth), then draw or the depth budget (both worth 0), and only then
    /// the recursion over empty cells.
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        root: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        match self.lines.evaluate(board) {
            Outcome::Win(winner) => {
                let magnitude = WIN_SCORE - depth as i32;
                return if winner == root { magnitude } else { -magnitude };
            }
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }
        if depth >= self.max_depth {
            return 0;
        }

        let maximizing = to_move == root;
        let moves: Vec<Pos> = board.empty_positions().collect();
        let mut value = if maximizing { -WIN_SCORE } else { WIN_SCORE };

        for (i, &pos) in moves.iter().enumerate() {
            board.put(pos, to_move);
            let score = self.minimax(board, to_move.opponent(), root, depth + 1, alpha, beta);
            board.clear(pos);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            if self.prune && beta <= alpha {
                self.stats.branches_pruned += (moves.len() - i - 1) as u64;
                break;
            }
        }
        value
    }
}
