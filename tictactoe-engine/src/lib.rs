//! Adversarial move search for variable-size tic-tac-toe.
//!
//! This crate sits on top of [`tictactoe_core`] and computes the bot's move:
//! a depth-bounded minimax search with alpha-beta pruning over the empty
//! cells of a board, using the core crate's win detector to cut recursion
//! short at decided positions.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe_core::{Board, Mark};
//! use tictactoe_engine::{SearchConfig, Searcher};
//!
//! let mut board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
//! let mut searcher = Searcher::new(SearchConfig::classic()).unwrap();
//!
//! let result = searcher.best_move(&mut board, Mark::Player).unwrap();
//! assert_eq!((result.pos.row, result.pos.col), (0, 2)); // completes the row
//! ```
//!
//! The search leaves the caller's board exactly as it found it: moves are
//! simulated in place and reverted before returning.

pub mod config;
pub mod search;
pub mod stats;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::SearchConfig;
pub use search::{SearchError, SearchResult, Searcher, WIN_SCORE};
pub use stats::SearchStats;
