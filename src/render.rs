//! Renderer: translates a window of the board into display draw calls.
//!
//! The active piece is OR-ed into the board for the duration of the draw and
//! removed again afterwards unless the caller wants it to persist (it just
//! locked). Ordering is load-bearing: merge piece, compute and stream the
//! window, optionally unmerge, then swap - the board is the rendering source
//! of truth and is mutated on both sides of the draw.

use anyhow::Result;

use crate::core::GameState;
use crate::display::Display;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Rows drawn above and below the active piece's anchor on a partial redraw.
/// Narrower windows leave stale double-buffer artifacts behind a moving
/// piece; six rows is the envelope that covers them.
const WINDOW_MARGIN: i8 = 6;

/// Display pixels per board cell along the row axis; also the number of
/// identical bytes streamed per board row per lane.
const BLOCK_SCALE: u8 = 4;

/// Output byte lanes: two board columns pack into each lane byte.
const LANES: u8 = BOARD_WIDTH / 2;

/// Draw the board (with the active piece transiently merged in) to the
/// display and swap once.
///
/// `full_redraw` widens the draw window to the whole board; otherwise only
/// the rows around the active piece are streamed - the path that keeps frame
/// times inside budget on constrained hardware. `leave_piece_drawn` skips
/// the unmerge step; pass it after a lock, when the piece's bits are now
/// permanent board content.
pub fn render(
    game: &mut GameState,
    display: &mut impl Display,
    full_redraw: bool,
    leave_piece_drawn: bool,
) -> Result<()> {
    game.merge_piece();

    let (y_min, y_max) = draw_window(game.position().y, full_redraw);

    display.set_cursor(y_min * BLOCK_SCALE, 0)?;
    for lane in 0..LANES {
        for y in y_min..y_max {
            let row = game.board().row(y);
            let block = pack_pair(row, lane);

            display.start_data()?;
            for _ in 0..BLOCK_SCALE {
                display.send_data(block)?;
            }
            display.end_data()?;
        }
        display.set_cursor(y_min * BLOCK_SCALE, lane + 1)?;
    }

    if !leave_piece_drawn {
        game.unmerge_piece();
    }

    display.swap_buffers()?;
    Ok(())
}

/// Row range `[min, max)` to stream: the whole board, or a clamped margin
/// around the anchor row.
fn draw_window(anchor_y: i8, full_redraw: bool) -> (u8, u8) {
    if full_redraw {
        return (0, BOARD_HEIGHT);
    }

    let min = (anchor_y - WINDOW_MARGIN).max(0) as u8;
    let max = (anchor_y + WINDOW_MARGIN).clamp(0, BOARD_HEIGHT as i8) as u8;
    (min.min(max), max)
}

/// One output byte for a pair of board columns: the odd column of the pair
/// fills the high nibble, the even column the low nibble (two logical
/// pixels doubled into one coarse block).
fn pack_pair(row: u8, lane: u8) -> u8 {
    let odd = row & (1 << (lane * 2 + 1)) != 0;
    let even = row & (1 << (lane * 2)) != 0;

    let mut block = 0u8;
    if odd {
        block |= 0xF0;
    }
    if even {
        block |= 0x0F;
    }
    block
}
