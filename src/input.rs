//! Input collaborator boundary.
//!
//! Buttons are polled, not event-driven, and no debounce is guaranteed: a
//! bouncing source may produce spurious rapid moves or rotations. The game
//! loop polls several times per frame and accumulates samples into the
//! sticky `Buttons` set drained once per movement decision.

use crate::types::Buttons;

pub trait InputSource {
    /// Sample the current button state.
    fn poll(&mut self) -> Buttons;

    /// Has an external stop been requested? Ends the run loop even before
    /// game over.
    fn stop_requested(&mut self) -> bool {
        false
    }
}

/// Input source that never reports a press. Useful for tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Buttons {
        Buttons::empty()
    }
}
