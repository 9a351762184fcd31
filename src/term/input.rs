//! Keyboard adapter for the polled button interface.
//!
//! Terminals deliver key events, and many never emit releases, so each
//! mapped key latches its button for a short window instead of tracking true
//! held state. A latched press reads as "currently pressed" for a frame or
//! two, which is close enough to the hardware's level-triggered buttons.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;

use crate::input::InputSource;
use crate::types::Buttons;

/// How long a key press reads as "pressed" without a release event.
const DEFAULT_LATCH_MS: u64 = 40;

pub struct TermInput {
    latch: Duration,
    left_until: Option<Instant>,
    right_until: Option<Instant>,
    rotate_until: Option<Instant>,
    stop: bool,
}

impl TermInput {
    pub fn new() -> Self {
        Self::with_latch(Duration::from_millis(DEFAULT_LATCH_MS))
    }

    pub fn with_latch(latch: Duration) -> Self {
        Self {
            latch,
            left_until: None,
            right_until: None,
            rotate_until: None,
            stop: false,
        }
    }

    /// Drain all pending terminal events without blocking.
    fn pump(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(false) => break,
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => self.apply(key),
                    Ok(_) => {}
                    Err(err) => {
                        warn!("input read failed: {err}");
                        break;
                    }
                },
                Err(err) => {
                    warn!("input poll failed: {err}");
                    break;
                }
            }
        }
    }

    fn apply(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            match key.code {
                KeyCode::Left | KeyCode::Char('a') => self.left_until = None,
                KeyCode::Right | KeyCode::Char('d') => self.right_until = None,
                KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => {
                    self.rotate_until = None;
                }
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.stop = true;
            return;
        }

        let until = Some(Instant::now() + self.latch);
        match key.code {
            KeyCode::Left | KeyCode::Char('a') => self.left_until = until,
            KeyCode::Right | KeyCode::Char('d') => self.right_until = until,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => self.rotate_until = until,
            KeyCode::Esc | KeyCode::Char('q') => self.stop = true,
            _ => {}
        }
    }

    fn latched(slot: &mut Option<Instant>, now: Instant) -> bool {
        match *slot {
            Some(until) if now < until => true,
            Some(_) => {
                *slot = None;
                false
            }
            None => false,
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TermInput {
    fn poll(&mut self) -> Buttons {
        self.pump();

        let now = Instant::now();
        let mut sample = Buttons::empty();
        if Self::latched(&mut self.left_until, now) {
            sample.insert(Buttons::LEFT);
        }
        if Self::latched(&mut self.right_until, now) {
            sample.insert(Buttons::RIGHT);
        }
        if Self::latched(&mut self.rotate_until, now) {
            sample.insert(Buttons::ROTATE);
        }
        sample
    }

    fn stop_requested(&mut self) -> bool {
        self.stop
    }
}
