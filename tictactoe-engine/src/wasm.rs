//! WASM bindings for the game engine.
//!
//! Provides a JavaScript-friendly API: the browser keeps the DOM and the
//! click handling, this wrapper keeps the board and computes the bot's
//! moves.

use wasm_bindgen::prelude::*;

use tictactoe_core::{Board, Mark, Outcome, Pos};

use crate::{SearchConfig, Searcher};

/// A game session: one board plus the searcher configured for it.
#[wasm_bindgen]
pub struct WasmGame {
    board: Board,
    searcher: Searcher,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game. `size` is the board side (3-5), `win_len` the run
    /// needed to win, `max_depth` the search budget in plies.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8, win_len: u8, max_depth: u8) -> Result<WasmGame, JsValue> {
        let config = SearchConfig {
            size,
            win_len,
            max_depth,
            prune: true,
        };
        let searcher = Searcher::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let board = Board::new(size).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { board, searcher })
    }

    /// Apply a move for the given mark (1 = Player, 2 = Opponent).
    /// Returns false and leaves the board untouched if the move is illegal.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: u8, col: u8, mark: u8) -> bool {
        let Some(mark) = Mark::from_bits(mark) else {
            return false;
        };
        self.board.apply(Pos::new(row, col), mark).is_ok()
    }

    /// Compute the best move for the given mark (1 = Player, 2 = Opponent).
    ///
    /// Returns `{ pos: { row, col }, score }`, or null when the board is
    /// full or the mark is invalid. Does not apply the move.
    #[wasm_bindgen(js_name = bestMove)]
    pub fn best_move(&mut self, mark: u8) -> JsValue {
        let Some(mark) = Mark::from_bits(mark) else {
            return JsValue::NULL;
        };
        match self.searcher.best_move(&mut self.board, mark) {
            Ok(result) => serde_wasm_bindgen::to_value(&result).unwrap(),
            Err(_) => JsValue::NULL,
        }
    }

    /// Get the game status: "ongoing", "player_wins", "opponent_wins", or "draw".
    pub fn outcome(&self) -> String {
        match self.searcher.lines().evaluate(&self.board) {
            Outcome::Win(Mark::Player) => "player_wins".to_string(),
            Outcome::Win(Mark::Opponent) => "opponent_wins".to_string(),
            Outcome::Draw => "draw".to_string(),
            Outcome::Ongoing => "ongoing".to_string(),
        }
    }

    /// Get the winning run as a flat array [row, col, row, col, ...].
    /// Returns an empty array while no side has won.
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        match self.searcher.lines().winning_window(&self.board) {
            Some((_, cells)) => cells.iter().flat_map(|pos| [pos.row, pos.col]).collect(),
            None => vec![],
        }
    }

    /// Mark at a cell: 0 empty, 1 Player, 2 Opponent.
    /// Out-of-range coordinates read as empty.
    pub fn cell(&self, row: u8, col: u8) -> u8 {
        let pos = Pos::new(row, col);
        if !self.board.in_range(pos) {
            return 0;
        }
        match self.board.get(pos) {
            None => 0,
            Some(mark) => mark as u8,
        }
    }

    /// Raw board encoding, for snapshots on the JavaScript side.
    pub fn encoding(&self) -> u64 {
        self.board.to_bits()
    }

    /// Clear the board for a new game with the same configuration.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size()).expect("size was validated at construction");
    }
}
