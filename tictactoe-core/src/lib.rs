//! Variable-size tic-tac-toe game logic with a bit-based board representation.
//!
//! # Board Encoding (64-bit)
//!
//! ```text
//! Bits 0..2*N²: Board state (2 bits per cell, row-major order)
//!
//! Each cell (2 bits):
//!   0 = empty, 1 = Player, 2 = Opponent
//!
//! Cell indices for N = 3:
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! The side length is bounded by the encoding: N² cells at 2 bits each must
//! fit in a `u64`, so N ranges over 3..=5 (5×5 = 50 bits).
//!
//! # Win Detection
//!
//! Winning runs are detected against a precomputed [`WinLines`] table: every
//! window of `win_len` consecutive cells along a row, column, or diagonal is
//! compiled once into a cell-index bitmask, and a side wins when one of its
//! occupancy masks covers a window. For a 3×3 board with run length 3 the
//! table holds the familiar 8 lines; for 5×5 with run length 4 it holds 28
//! overlapping windows.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported board side.
pub const MIN_SIZE: u8 = 3;
/// Largest supported board side (N²·2 bits must fit in a `u64`).
pub const MAX_SIZE: u8 = 5;
/// Smallest supported winning run length.
pub const MIN_RUN: u8 = 3;

/// Errors for board construction and move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board side outside the supported range.
    #[error("board size {size} outside supported range {MIN_SIZE}..={MAX_SIZE}")]
    InvalidSize { size: u8 },
    /// Run length incompatible with the board side.
    #[error("run length {win_len} invalid for board size {size}")]
    InvalidRunLength { size: u8, win_len: u8 },
    /// Move coordinates outside the board.
    #[error("position {pos} outside {size}x{size} board")]
    OutOfRange { pos: Pos, size: u8 },
    /// Move targets a cell that already holds a mark.
    #[error("cell {pos} is already occupied")]
    Occupied { pos: Pos },
    /// Unrecognized cell character while parsing a board.
    #[error("unrecognized cell marker {0:?}")]
    InvalidMarker(char),
}

/// One of the two sides.
///
/// The names take the bot's point of view, but nothing in this crate
/// privileges either side: all operations are symmetric.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mark {
    Player = 1,
    Opponent = 2,
}

impl Mark {
    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Convert from the 2-bit cell encoding (1 or 2) to a Mark.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Mark> {
        match bits {
            1 => Some(Mark::Player),
            2 => Some(Mark::Opponent),
            _ => None,
        }
    }

    /// Display character: `X` for Player, `O` for Opponent.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

/// A cell coordinate, which is also the move type: a move in this game is
/// nothing but the cell it targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Game status as seen by the win detector.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The given side has a completed run.
    Win(Mark),
    /// No winner and no empty cell remains.
    Draw,
    /// No winner and at least one empty cell remains.
    Ongoing,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Undo information for reversing a validated [`Board::apply`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Undo {
    pos: Pos,
}

/// Compact board state: side length plus one `u64` of packed cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: u8,
    bits: u64,
}

impl Board {
    /// Bits per cell (2 bits: 0 = empty, 1 = Player, 2 = Opponent).
    const CELL_BITS: u32 = 2;
    /// Mask for a single cell.
    const CELL_MASK: u64 = 0b11;

    /// Create a new empty board of the given side length.
    pub fn new(size: u8) -> Result<Board, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Board { size, bits: 0 })
    }

    /// Reconstruct a board from a raw encoding, as produced by [`Board::to_bits`].
    pub fn from_bits(size: u8, bits: u64) -> Result<Board, BoardError> {
        let board = Board::new(size)?;
        Ok(Board { bits, ..board })
    }

    /// Get the raw cell encoding.
    #[inline]
    pub fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn cell_count(&self) -> u8 {
        self.size * self.size
    }

    /// Check that a position lies on the board.
    #[inline]
    pub fn in_range(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Row-major cell index for a position.
    #[inline]
    fn index(&self, pos: Pos) -> u32 {
        pos.row as u32 * self.size as u32 + pos.col as u32
    }

    #[inline]
    fn pos_at(&self, index: u8) -> Pos {
        Pos::new(index / self.size, index % self.size)
    }

    /// Get the mark at a position, or `None` for an empty cell.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        debug_assert!(self.in_range(pos));
        let bits = (self.bits >> (self.index(pos) * Self::CELL_BITS)) & Self::CELL_MASK;
        Mark::from_bits(bits as u8)
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Write a mark into a cell.
    ///
    /// Does NOT validate - the caller must ensure the position is on the
    /// board and the cell is empty. Used by search code that enumerates
    /// empty cells itself; external callers should prefer [`Board::apply`].
    #[inline]
    pub fn put(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.in_range(pos));
        debug_assert!(self.is_empty(pos));
        self.bits |= (mark as u64) << (self.index(pos) * Self::CELL_BITS);
    }

    /// Reset a cell to empty. The inverse of [`Board::put`].
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        debug_assert!(self.in_range(pos));
        self.bits &= !(Self::CELL_MASK << (self.index(pos) * Self::CELL_BITS));
    }

    /// Apply a move with full validation, returning undo information.
    ///
    /// Rejects coordinates outside the board and occupied cells without
    /// mutating anything. Use [`Board::undo`] with the returned token to
    /// restore the exact prior state.
    pub fn apply(&mut self, pos: Pos, mark: Mark) -> Result<Undo, BoardError> {
        if !self.in_range(pos) {
            return Err(BoardError::OutOfRange { pos, size: self.size });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied { pos });
        }
        self.put(pos, mark);
        Ok(Undo { pos })
    }

    /// Undo a move, restoring the board to its previous state.
    ///
    /// This is the inverse of [`Board::apply`].
    pub fn undo(&mut self, undo: &Undo) {
        self.clear(undo.pos);
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> u8 {
        let mut count = 0;
        for idx in 0..self.cell_count() {
            if self.is_empty(self.pos_at(idx)) {
                count += 1;
            }
        }
        count
    }

    /// Check if no empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Iterate over empty cells in row-major order (increasing row, then
    /// increasing column).
    ///
    /// This order is a contract: the search breaks score ties by keeping the
    /// first move it encounters, so callers relying on reproducible results
    /// depend on this enumeration being stable.
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cell_count())
            .map(|idx| self.pos_at(idx))
            .filter(|&pos| self.is_empty(pos))
    }

    /// Compute occupancy masks for both sides.
    ///
    /// Returns `(player_mask, opponent_mask)` where bit i is set if that side
    /// holds cell i. Win detection tests these against window masks.
    pub fn mark_masks(&self) -> (u32, u32) {
        let mut player = 0u32;
        let mut opponent = 0u32;
        for idx in 0..self.cell_count() {
            match self.get(self.pos_at(idx)) {
                Some(Mark::Player) => player |= 1 << idx,
                Some(Mark::Opponent) => opponent |= 1 << idx,
                None => {}
            }
        }
        (player, opponent)
    }

    /// Parse a board from one string per row: `X` = Player, `O` = Opponent,
    /// `.` = empty. Case-insensitive for the marks.
    pub fn from_rows(rows: &[&str]) -> Result<Board, BoardError> {
        let size = rows.len() as u8;
        let mut board = Board::new(size)?;
        for (r, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != size as usize {
                return Err(BoardError::InvalidSize { size });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'X' | 'x' => board.put(pos, Mark::Player),
                    'O' | 'o' => board.put(pos, Mark::Opponent),
                    '.' => {}
                    other => return Err(BoardError::InvalidMarker(other)),
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.get(Pos::new(row, col)) {
                    Some(mark) => write!(f, "{}", mark.as_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ========== Win detection ==========

/// Direction vectors for the four line orientations.
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// The line families of a board: every window of `win_len` consecutive cells
/// along a row, column, or diagonal, compiled into cell-index bitmasks.
///
/// Built once per `(size, win_len)` configuration and immutable afterwards.
/// Every winning configuration on the board is covered by exactly these
/// windows, including the overlapping offsets that appear when
/// `win_len < size` (a 5-cell row admits two 4-cell windows).
#[derive(Clone, Debug)]
pub struct WinLines {
    size: u8,
    win_len: u8,
    masks: Vec<u32>,
}

impl WinLines {
    /// Build the window table for a board side and run length.
    ///
    /// Fails fast on unsupported combinations so that a bad configuration is
    /// caught when the rules are set up, never mid-search.
    pub fn new(size: u8, win_len: u8) -> Result<WinLines, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        if win_len < MIN_RUN || win_len > size {
            return Err(BoardError::InvalidRunLength { size, win_len });
        }

        let n = size as i8;
        let span = (win_len - 1) as i8;
        let mut masks = Vec::new();
        for (dr, dc) in DIRECTIONS {
            for row in 0..n {
                for col in 0..n {
                    let end_row = row + dr * span;
                    let end_col = col + dc * span;
                    if !(0..n).contains(&end_row) || !(0..n).contains(&end_col) {
                        continue;
                    }
                    let mut mask = 0u32;
                    for step in 0..win_len as i8 {
                        let r = (row + dr * step) as u32;
                        let c = (col + dc * step) as u32;
                        mask |= 1 << (r * size as u32 + c);
                    }
                    masks.push(mask);
                }
            }
        }
        Ok(WinLines { size, win_len, masks })
    }

    /// Board side this table was built for.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Run length required to win.
    #[inline]
    pub fn win_len(&self) -> u8 {
        self.win_len
    }

    /// Number of windows in the table.
    #[inline]
    pub fn window_count(&self) -> usize {
        self.masks.len()
    }

    /// Classify a board position.
    ///
    /// Pure function of the board; callable on any partially filled board,
    /// which is how the search short-circuits recursion at every node.
    ///
    /// If a (necessarily illegal) board contains completed runs for both
    /// sides, `Win(Player)` is reported: every window is tested for Player
    /// before any window is tested for Opponent. The precedence is arbitrary
    /// but deterministic.
    pub fn evaluate(&self, board: &Board) -> Outcome {
        debug_assert_eq!(board.size(), self.size);
        let (player, opponent) = board.mark_masks();
        for &mask in &self.masks {
            if player & mask == mask {
                return Outcome::Win(Mark::Player);
            }
        }
        for &mask in &self.masks {
            if opponent & mask == mask {
                return Outcome::Win(Mark::Opponent);
            }
        }
        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Get the cells of the first completed window, if any.
    ///
    /// Same precedence as [`WinLines::evaluate`]. Useful for highlighting the
    /// winning run in a front end.
    pub fn winning_window(&self, board: &Board) -> Option<(Mark, Vec<Pos>)> {
        debug_assert_eq!(board.size(), self.size);
        let (player, opponent) = board.mark_masks();
        for (mark, covered) in [(Mark::Player, player), (Mark::Opponent, opponent)] {
            for &mask in &self.masks {
                if covered & mask == mask {
                    return Some((mark, self.mask_cells(mask)));
                }
            }
        }
        None
    }

    fn mask_cells(&self, mask: u32) -> Vec<Pos> {
        (0..self.size as u32 * self.size as u32)
            .filter(|idx| mask & (1 << idx) != 0)
            .map(|idx| Pos::new((idx / self.size as u32) as u8, (idx % self.size as u32) as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::Player.opponent(), Mark::Opponent);
        assert_eq!(Mark::Opponent.opponent(), Mark::Player);
    }

    #[test]
    fn test_mark_from_bits() {
        assert_eq!(Mark::from_bits(0), None);
        assert_eq!(Mark::from_bits(1), Some(Mark::Player));
        assert_eq!(Mark::from_bits(2), Some(Mark::Opponent));
        assert_eq!(Mark::from_bits(3), None);
    }

    #[test]
    fn test_board_sizes() {
        for size in MIN_SIZE..=MAX_SIZE {
            assert!(Board::new(size).is_ok());
        }
        assert_eq!(Board::new(2), Err(BoardError::InvalidSize { size: 2 }));
        assert_eq!(Board::new(6), Err(BoardError::InvalidSize { size: 6 }));
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.to_bits(), 0);
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(Pos::new(row, col)), None);
            }
        }
    }

    #[test]
    fn test_put_get_clear() {
        let mut board = Board::new(3).unwrap();
        let original = board.to_bits();

        board.put(Pos::new(1, 2), Mark::Player);
        assert_eq!(board.get(Pos::new(1, 2)), Some(Mark::Player));
        assert_eq!(board.empty_count(), 8);

        board.put(Pos::new(2, 0), Mark::Opponent);
        assert_eq!(board.get(Pos::new(2, 0)), Some(Mark::Opponent));
        // The first cell is untouched
        assert_eq!(board.get(Pos::new(1, 2)), Some(Mark::Player));

        board.clear(Pos::new(1, 2));
        board.clear(Pos::new(2, 0));
        assert_eq!(board.to_bits(), original);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut board = Board::new(3).unwrap();
        let err = board.apply(Pos::new(3, 0), Mark::Player);
        assert_eq!(
            err,
            Err(BoardError::OutOfRange { pos: Pos::new(3, 0), size: 3 })
        );
        assert_eq!(board.to_bits(), 0);
    }

    #[test]
    fn test_apply_occupied() {
        let mut board = Board::new(3).unwrap();
        board.apply(Pos::new(0, 0), Mark::Player).unwrap();
        let err = board.apply(Pos::new(0, 0), Mark::Opponent);
        assert_eq!(err, Err(BoardError::Occupied { pos: Pos::new(0, 0) }));
        assert_eq!(board.get(Pos::new(0, 0)), Some(Mark::Player));
    }

    #[test]
    fn test_apply_undo_roundtrip() {
        let mut board = Board::new(3).unwrap();
        let original = board.to_bits();

        let moves = [
            (Pos::new(0, 0), Mark::Player),
            (Pos::new(1, 1), Mark::Opponent),
            (Pos::new(2, 2), Mark::Player),
        ];

        let mut undos = Vec::new();
        for &(pos, mark) in &moves {
            undos.push(board.apply(pos, mark).unwrap());
        }

        for undo in undos.iter().rev() {
            board.undo(undo);
        }
        assert_eq!(board.to_bits(), original);
    }

    #[test]
    fn test_apply_undo_fuzz() {
        use rand::prelude::*;

        let mut rng = rand::rng();

        for _ in 0..100 {
            let size = rng.random_range(MIN_SIZE..=MAX_SIZE);
            let mut board = Board::new(size).unwrap();
            let mut mark = Mark::Player;

            // Fill a random prefix of the board
            for _ in 0..rng.random_range(0..board.cell_count()) {
                let empties: Vec<Pos> = board.empty_positions().collect();
                let pos = empties[rng.random_range(0..empties.len())];
                board.apply(pos, mark).unwrap();
                mark = mark.opponent();
            }

            // A further apply/undo pair must restore the exact encoding
            let empties: Vec<Pos> = board.empty_positions().collect();
            if !empties.is_empty() {
                let original = board.to_bits();
                let pos = empties[rng.random_range(0..empties.len())];
                let undo = board.apply(pos, mark).unwrap();
                board.undo(&undo);
                assert_eq!(board.to_bits(), original, "fuzz failed for size {size}");
            }
        }
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new(3).unwrap();
        board.put(Pos::new(0, 1), Mark::Player);
        board.put(Pos::new(2, 0), Mark::Opponent);

        let empties: Vec<Pos> = board.empty_positions().collect();
        assert_eq!(
            empties,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_mark_masks() {
        let board = Board::from_rows(&["X.O", ".X.", "..O"]).unwrap();
        let (player, opponent) = board.mark_masks();
        assert_eq!(player, (1 << 0) | (1 << 4));
        assert_eq!(opponent, (1 << 2) | (1 << 8));
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(Pos::new(0, 0)), Some(Mark::Player));
        assert_eq!(board.get(Pos::new(0, 1)), Some(Mark::Player));
        assert_eq!(board.get(Pos::new(1, 0)), Some(Mark::Opponent));
        assert_eq!(board.get(Pos::new(0, 2)), None);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Board::from_rows(&["XX", "OO"]),
            Err(BoardError::InvalidSize { size: 2 })
        );
        // Ragged row
        assert_eq!(
            Board::from_rows(&["XX.", "OO", "..."]),
            Err(BoardError::InvalidSize { size: 3 })
        );
        assert_eq!(
            Board::from_rows(&["XX.", "OO.", "..?"]),
            Err(BoardError::InvalidMarker('?'))
        );
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
        assert_eq!(board.to_string(), "XX.\nOO.\n...\n");
    }

    #[test]
    fn test_from_bits_roundtrip() {
        let board = Board::from_rows(&["X.O", ".X.", "O.X"]).unwrap();
        let copy = Board::from_bits(board.size(), board.to_bits()).unwrap();
        assert_eq!(copy, board);
    }

    // ========== WinLines ==========

    #[test]
    fn test_window_count_3x3() {
        // 3 rows + 3 columns + 2 diagonals, one window each
        let lines = WinLines::new(3, 3).unwrap();
        assert_eq!(lines.window_count(), 8);
    }

    #[test]
    fn test_window_count_5x5_run4() {
        // 2 offsets per row/column (10 + 10), 4 per diagonal direction
        let lines = WinLines::new(5, 4).unwrap();
        assert_eq!(lines.window_count(), 28);
    }

    #[test]
    fn test_window_count_5x5_run5() {
        // Full-length lines only: 5 + 5 + 1 + 1
        let lines = WinLines::new(5, 5).unwrap();
        assert_eq!(lines.window_count(), 12);
    }

    #[test]
    fn test_invalid_configurations() {
        // Run longer than any line
        assert!(matches!(
            WinLines::new(3, 4),
            Err(BoardError::InvalidRunLength { size: 3, win_len: 4 })
        ));
        assert!(matches!(
            WinLines::new(3, 2),
            Err(BoardError::InvalidRunLength { size: 3, win_len: 2 })
        ));
        assert!(matches!(
            WinLines::new(6, 4),
            Err(BoardError::InvalidSize { size: 6 })
        ));
    }

    #[test]
    fn test_all_lines_win_3x3() {
        let lines = WinLines::new(3, 3).unwrap();
        let wins = [
            ["XXX", "...", "..."],
            ["...", "XXX", "..."],
            ["...", "...", "XXX"],
            ["X..", "X..", "X.."],
            [".X.", ".X.", ".X."],
            ["..X", "..X", "..X"],
            ["X..", ".X.", "..X"],
            ["..X", ".X.", "X.."],
        ];
        for rows in &wins {
            let board = Board::from_rows(rows).unwrap();
            assert_eq!(
                lines.evaluate(&board),
                Outcome::Win(Mark::Player),
                "failed for {rows:?}"
            );
        }
    }

    #[test]
    fn test_opponent_win() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["O..", "O.X", "OXX"]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Opponent));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_draw() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_a_win() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["XXX", "OOX", "OXO"]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Player));
    }

    #[test]
    fn test_double_win_prefers_player() {
        // Cannot arise from alternating play; the tie-break is fixed so that
        // every implementation of these rules agrees.
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["XXX", "OOO", "..."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Player));
    }

    #[test]
    fn test_5x5_window_offsets() {
        let lines = WinLines::new(5, 4).unwrap();

        // Run of 4 starting at column 0
        let board = Board::from_rows(&["XXXX.", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Player));

        // Run of 4 starting at column 1 - the second window of the same row
        let board = Board::from_rows(&[".XXXX", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Player));

        // Run of only 3 is not a win at run length 4
        let board = Board::from_rows(&[".XXX.", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_5x5_diagonals() {
        let lines = WinLines::new(5, 4).unwrap();

        // SE diagonal from (1,1)
        let board = Board::from_rows(&[".....", ".O...", "..O..", "...O.", "....O"]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Opponent));

        // SW diagonal from (0,3)
        let board = Board::from_rows(&["...X.", "..X..", ".X...", "X....", "....."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Win(Mark::Player));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let lines = WinLines::new(5, 4).unwrap();
        let board = Board::from_rows(&["XX.XX", ".....", ".....", ".....", "....."]).unwrap();
        assert_eq!(lines.evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_winning_window_cells() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["...", "XXX", "O.O"]).unwrap();
        let (mark, cells) = lines.winning_window(&board).unwrap();
        assert_eq!(mark, Mark::Player);
        assert_eq!(cells, vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
    }

    #[test]
    fn test_winning_window_none() {
        let lines = WinLines::new(3, 3).unwrap();
        let board = Board::from_rows(&["XX.", "OO.", "..."]).unwrap();
        assert!(lines.winning_window(&board).is_none());
    }

    #[test]
    fn test_mark_swap_symmetry() {
        use rand::prelude::*;

        let mut rng = rand::rng();
        let lines3 = WinLines::new(3, 3).unwrap();
        let lines5 = WinLines::new(5, 4).unwrap();

        for _ in 0..200 {
            let (size, lines) = if rng.random_bool(0.5) {
                (3, &lines3)
            } else {
                (5, &lines5)
            };
            let mut board = Board::new(size).unwrap();
            let mut swapped = Board::new(size).unwrap();
            let mut mark = Mark::Player;
            for _ in 0..rng.random_range(0..board.cell_count()) {
                // Stop at decided positions: play continuing past a win could
                // complete runs for both sides, and the double-win tie-break
                // is deliberately asymmetric.
                if lines.evaluate(&board).is_over() {
                    break;
                }
                let empties: Vec<Pos> = board.empty_positions().collect();
                let pos = empties[rng.random_range(0..empties.len())];
                board.put(pos, mark);
                swapped.put(pos, mark.opponent());
                mark = mark.opponent();
            }

            let expected = match lines.evaluate(&board) {
                Outcome::Win(m) => Outcome::Win(m.opponent()),
                other => other,
            };
            assert_eq!(lines.evaluate(&swapped), expected);
        }
    }
}
