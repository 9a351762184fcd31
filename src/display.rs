//! Display collaborator boundary.
//!
//! The game core never talks to hardware; it streams bytes through this
//! trait. The target is a page-addressed monochrome panel: a cursor selects
//! a position, then a bracketed sequence of raw data bytes is written, each
//! byte advancing the cursor along the row axis by one. Exact pixel encoding
//! (bits per byte, orientation) is the backend's business and must be
//! adapted behind this trait, never inside the game logic.

use anyhow::Result;

pub trait Display {
    /// Position the write cursor. `row` is a pixel offset along the long
    /// axis of the panel, `column` an output byte lane.
    fn set_cursor(&mut self, row: u8, column: u8) -> Result<()>;

    /// Begin a raw data burst at the current cursor.
    fn start_data(&mut self) -> Result<()>;

    /// Write one byte and advance the cursor one row position.
    fn send_data(&mut self, byte: u8) -> Result<()>;

    /// End the current data burst.
    fn end_data(&mut self) -> Result<()>;

    /// Present the written frame. Issued exactly once per render pass.
    fn swap_buffers(&mut self) -> Result<()>;
}
