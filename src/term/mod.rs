//! Terminal backends for the display and input collaborators.
//!
//! These adapt the abstract panel and button boundaries to a development
//! terminal via crossterm; the game logic is identical under real hardware.

pub mod display;
pub mod input;

pub use display::TermDisplay;
pub use input::TermInput;
