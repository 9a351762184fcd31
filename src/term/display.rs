//! Terminal emulation of the page-addressed monochrome panel.
//!
//! Byte writes land in a back page buffer exactly as they would on the
//! panel's RAM; `swap_buffers` diffs the decoded board cells against the
//! previously presented frame and queues only the changed terminal cells
//! before one flush. The panel's doubled 4x4 pixel blocks map to one
//! two-column terminal cell, drawn upright (board row 0 at the bottom).

use std::io::{self, Write};

use anyhow::{bail, Result};

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::display::Display;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Pixel rows along the panel's long axis (4 per board row).
const PANEL_ROWS: usize = BOARD_HEIGHT as usize * 4;

/// Byte lanes carrying board content (2 columns per lane).
const PANEL_LANES: usize = BOARD_WIDTH as usize / 2;

pub struct TermDisplay {
    stdout: io::Stdout,
    back: [[u8; PANEL_ROWS]; PANEL_LANES],
    front: [[u8; PANEL_ROWS]; PANEL_LANES],
    row: usize,
    lane: usize,
    in_data: bool,
    entered: bool,
}

impl TermDisplay {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            back: [[0; PANEL_ROWS]; PANEL_LANES],
            front: [[0; PANEL_ROWS]; PANEL_LANES],
            row: 0,
            lane: 0,
            in_data: false,
            entered: false,
        }
    }

    /// Take over the terminal: raw mode, alternate screen, playfield frame.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.draw_frame()?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call on the error path.
    pub fn exit(&mut self) -> Result<()> {
        self.entered = false;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        let inner = BOARD_WIDTH as usize * 2;
        let top = format!("┌{}┐", "─".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(&top))?;
        for y in 0..BOARD_HEIGHT as u16 {
            self.stdout.queue(cursor::MoveTo(0, y + 1))?;
            self.stdout.queue(Print("│"))?;
            self.stdout.queue(cursor::MoveTo(inner as u16 + 1, y + 1))?;
            self.stdout.queue(Print("│"))?;
        }
        self.stdout
            .queue(cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1))?;
        self.stdout.queue(Print(&bottom))?;
        Ok(())
    }

    /// Decode one board cell from a page buffer. Each cell is four identical
    /// bytes starting at pixel row `y * 4`; the odd column of a lane pair
    /// lives in the high nibble.
    fn cell(buffer: &[[u8; PANEL_ROWS]; PANEL_LANES], x: u8, y: u8) -> bool {
        let byte = buffer[x as usize / 2][y as usize * 4];
        if x % 2 == 1 {
            byte & 0xF0 != 0
        } else {
            byte & 0x0F != 0
        }
    }
}

impl Default for TermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TermDisplay {
    fn set_cursor(&mut self, row: u8, column: u8) -> Result<()> {
        self.row = row as usize;
        self.lane = column as usize;
        Ok(())
    }

    fn start_data(&mut self) -> Result<()> {
        if self.in_data {
            bail!("data burst already started");
        }
        self.in_data = true;
        Ok(())
    }

    fn send_data(&mut self, byte: u8) -> Result<()> {
        if !self.in_data {
            bail!("data byte outside start_data/end_data");
        }
        // Writes past the board's lanes or rows fall off the emulated panel
        // edge; the cursor still advances, as it would on hardware.
        if self.lane < PANEL_LANES && self.row < PANEL_ROWS {
            self.back[self.lane][self.row] = byte;
        }
        self.row += 1;
        Ok(())
    }

    fn end_data(&mut self) -> Result<()> {
        if !self.in_data {
            bail!("data burst not started");
        }
        self.in_data = false;
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        if self.entered {
            let mut dirty = false;
            for y in 0..BOARD_HEIGHT {
                for x in 0..BOARD_WIDTH {
                    let next = Self::cell(&self.back, x, y);
                    if next == Self::cell(&self.front, x, y) {
                        continue;
                    }
                    // Upright orientation: board row 0 at the bottom, one
                    // cell is two terminal columns, inside the frame border.
                    let term_y = u16::from(BOARD_HEIGHT - 1 - y) + 1;
                    let term_x = u16::from(x) * 2 + 1;
                    self.stdout.queue(cursor::MoveTo(term_x, term_y))?;
                    self.stdout.queue(Print(if next { "██" } else { "  " }))?;
                    dirty = true;
                }
            }
            if dirty {
                self.stdout.flush()?;
            }
        }

        self.front = self.back;
        Ok(())
    }
}
