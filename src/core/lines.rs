//! Line-clear engine: windowed scan and in-place compaction after a lock.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::BOARD_HEIGHT;

/// Remove the first full row in the scan window (three rows below the locked
/// piece's anchor, clamped to the floor, up to the top of the board).
/// Returns the index of the removed row, or `None` when no full row remains.
///
/// The three-row margin covers the largest vertical span a piece can add
/// below its anchor, so the whole board never needs rescanning. Each call
/// re-scans from the window start: the shift after a removal may pull
/// another full row into an already-visited slot, and skipping it would
/// miss a clear when two full rows are adjacent.
///
/// One row per call so callers can redraw between removals; the compaction
/// is visible as a row-by-row collapse rather than one jump.
pub fn clear_one_full_row(board: &mut Board, anchor_y: i8) -> Option<u8> {
    let start = anchor_y.saturating_sub(3).max(0) as u8;

    for y in start..BOARD_HEIGHT {
        if board.is_row_full(y) {
            board.remove_row(y);
            return Some(y);
        }
    }

    None
}

/// Remove every full row in the scan window in one pass, shifting the rows
/// above down in place.
///
/// Returns the row indices cleared, in removal order. A single lock can
/// complete at most four rows (one per piece pixel).
pub fn clear_full_rows(board: &mut Board, anchor_y: i8) -> ArrayVec<u8, 4> {
    let mut cleared = ArrayVec::new();

    while let Some(y) = clear_one_full_row(board, anchor_y) {
        let _ = cleared.try_push(y);
    }

    cleared
}
