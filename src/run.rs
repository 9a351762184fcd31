//! Fixed-rate game loop.
//!
//! One frame: sample inputs, perform one fall-or-lock step, render, then
//! sleep out the remainder of the frame budget. A slow frame simply runs
//! late; frames are never skipped. Input is sampled at several points per
//! frame and OR-ed into the sticky set so a press between sub-steps is not
//! lost.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use crate::core::{GameState, ShapePicker};
use crate::display::Display;
use crate::input::InputSource;
use crate::render::render;

/// Run the game to completion.
///
/// Returns the score-derived exit value (`score * 10`) once the stack fills
/// the playfield or the input source requests a stop. The board is wiped on
/// the way out.
pub fn run(
    game: &mut GameState,
    display: &mut impl Display,
    input: &mut impl InputSource,
    picker: &mut impl ShapePicker,
    tick: Duration,
) -> Result<u32> {
    loop {
        let frame_start = Instant::now();

        game.accumulate(input.poll());
        if input.stop_requested() {
            info!("stop requested, ending run");
            break;
        }

        if game.can_fall() {
            game.accumulate(input.poll());
            game.advance();
            render(game, display, false, false)?;
            game.accumulate(input.poll());
        } else {
            if game.at_top() {
                info!("stack reached the top, game over");
                break;
            }

            game.lock();
            // Redundant-looking redraw: a double-buffered panel shows a
            // stale partial-redraw artifact after a lock unless the region
            // is streamed again while nothing moves.
            render(game, display, false, true)?;

            // Rows collapse one at a time on screen: stream the window again
            // after each removal instead of jumping to the compacted board.
            let mut cleared = 0u8;
            while game.clear_one_line().is_some() {
                cleared += 1;
                render(game, display, false, true)?;
            }
            game.credit_tetris_bonus(cleared);
            if cleared > 0 {
                debug!("cleared {cleared} line(s), score {}", game.score());
            }
            // Same workaround after compaction shifts the rows.
            render(game, display, false, true)?;

            if !game.spawn(picker) {
                info!("spawn blocked, game over");
                break;
            }
            game.accumulate(input.poll());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            std::thread::sleep(tick - elapsed);
        }
        game.accumulate(input.poll());
    }

    let score = game.score();
    game.end();
    Ok(score * 10)
}
