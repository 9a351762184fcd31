//! octris: a falling-block puzzle engine for an 8x32 monochrome display.
//!
//! The core (`core`) is pure logic over a bit-packed board; `render` streams
//! a window of it through the `display` boundary, `run` paces everything at
//! a fixed tick, and `term` provides development backends for the display
//! and input collaborators.

pub mod core;
pub mod display;
pub mod input;
pub mod render;
pub mod run;
pub mod term;
pub mod types;
