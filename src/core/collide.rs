//! Collision detection for hypothetical piece placements.

use crate::core::board::Board;
use crate::core::shapes::Shape;
use crate::types::{Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Would the piece collide if its anchor moved by `delta`?
///
/// For each of the four shape pixels, the candidate position
/// `anchor + offset + delta` collides when it is below the floor, outside a
/// side wall, or on an occupied cell within the stored rows. Rows at or above
/// `BOARD_HEIGHT` never collide: the piece is still in the air above the
/// playfield, and callers must not write to the board there.
///
/// Two deltas cover every use: `(0, -1)` asks "can the piece fall one more
/// row" and `(0, 0)` asks "is this placement itself valid" (after a
/// horizontal move, a rotation attempt, or a spawn).
pub fn would_collide(board: &Board, shape: &Shape, anchor: Position, delta: Position) -> bool {
    for offset in shape {
        let x = anchor.x + offset.x + delta.x;
        let y = anchor.y + offset.y + delta.y;

        if y < 0 || x < 0 || x >= BOARD_WIDTH as i8 {
            return true;
        }

        if y < BOARD_HEIGHT as i8 && board.occupied(x as u8, y as u8) {
            return true;
        }
    }

    false
}
