//! Core types shared across the crate.
//!
//! Pure data with no external dependencies.

/// Board dimensions. The board is 8 columns wide so a row packs into one byte.
pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 32;

/// Row mask with every column occupied.
pub const FULL_ROW: u8 = 0xFF;

/// Fixed frame budget in milliseconds (~60 updates per second).
pub const TICK_MS: u64 = 16;

/// Spawn anchor for new pieces. The spawn row is above the stored board so
/// pieces drop into view; pixels at y >= BOARD_HEIGHT are never written.
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 34;

/// A board coordinate pair. `x` is a column, `y` is a row counted from the
/// bottom-left. Validity is range-checked by whoever uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Sticky button sample, one bit per button.
///
/// Samples taken at different points within a frame are OR-ed together and
/// drained once per movement decision, so a press that lands between render
/// calls is not lost. Two rapid distinct presses may merge into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const LEFT: Buttons = Buttons(0b001);
    pub const RIGHT: Buttons = Buttons(0b010);
    pub const ROTATE: Buttons = Buttons(0b100);

    pub const fn empty() -> Self {
        Buttons(0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    /// Accumulate another sample (bitwise OR).
    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    /// Drain the accumulated sample, resetting to empty.
    pub fn take(&mut self) -> Buttons {
        std::mem::replace(self, Buttons::empty())
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_accumulate_and_drain() {
        let mut b = Buttons::empty();
        b.insert(Buttons::LEFT);
        b.insert(Buttons::ROTATE);
        assert!(b.contains(Buttons::LEFT));
        assert!(b.contains(Buttons::ROTATE));
        assert!(!b.contains(Buttons::RIGHT));

        let drained = b.take();
        assert!(drained.contains(Buttons::LEFT));
        assert!(b.is_empty());
    }

    #[test]
    fn test_buttons_or_merges_samples() {
        let merged = Buttons::LEFT | Buttons::RIGHT;
        assert!(merged.contains(Buttons::LEFT));
        assert!(merged.contains(Buttons::RIGHT));
    }
}
