//! Core module - pure game logic with no I/O dependencies.

pub mod board;
pub mod collide;
pub mod game;
pub mod lines;
pub mod rng;
pub mod shapes;

pub use board::Board;
pub use collide::would_collide;
pub use game::GameState;
pub use lines::{clear_full_rows, clear_one_full_row};
pub use rng::{ScriptedPicker, ShapePicker, SimpleRng};
pub use shapes::{kind_base, rotated, shape, Shape};
