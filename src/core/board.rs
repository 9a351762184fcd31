//! Bit-packed game board.
//!
//! 32 rows of 8 columns, one byte per row: bit `x` set means column `x` is
//! occupied. Row 0 is the bottom. Only locked pieces persist here; the
//! falling piece is merged in transiently by the renderer and removed again.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, FULL_ROW};

/// The locked-cell grid. Coordinate range checks are the caller's
/// responsibility; this type only indexes rows `0..32` and columns `0..8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [u8; BOARD_HEIGHT as usize],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            rows: [0; BOARD_HEIGHT as usize],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Is the cell at (x, y) occupied by a locked piece?
    pub fn occupied(&self, x: u8, y: u8) -> bool {
        debug_assert!(x < BOARD_WIDTH && y < BOARD_HEIGHT);
        self.rows[y as usize] & (1 << x) != 0
    }

    /// Set or clear a single cell.
    pub fn set(&mut self, x: u8, y: u8, value: bool) {
        debug_assert!(x < BOARD_WIDTH && y < BOARD_HEIGHT);
        if value {
            self.rows[y as usize] |= 1 << x;
        } else {
            self.rows[y as usize] &= !(1 << x);
        }
    }

    /// The packed occupancy mask of one row.
    pub fn row(&self, y: u8) -> u8 {
        debug_assert!(y < BOARD_HEIGHT);
        self.rows[y as usize]
    }

    /// Does this row have every column occupied?
    pub fn is_row_full(&self, y: u8) -> bool {
        self.row(y) == FULL_ROW
    }

    /// Remove row `y`: every row above shifts down one, the top row empties.
    pub fn remove_row(&mut self, y: u8) {
        debug_assert!(y < BOARD_HEIGHT);
        let top = BOARD_HEIGHT as usize - 1;
        for row in y as usize..top {
            self.rows[row] = self.rows[row + 1];
        }
        self.rows[top] = 0;
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.rows = [0; BOARD_HEIGHT as usize];
    }

    /// Build a board from raw row masks, row 0 first (test fixtures).
    #[cfg(test)]
    pub fn from_rows(rows: [u8; BOARD_HEIGHT as usize]) -> Self {
        Self { rows }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
