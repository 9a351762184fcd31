//! Shape catalog: the 7 tetromino kinds and their rotations.
//!
//! The catalog stores 28 entries, grouped so that indices `4k..4k+3` are the
//! four rotations of kind `k`. Stepping to the next rotation therefore never
//! leaves the group: `rotated` keeps the group bits and advances the low two
//! bits mod 4. Offsets are relative to the piece anchor, in board coordinates
//! (x right, y up).

use crate::types::Position;

/// One piece geometry: four pixel offsets from the anchor.
pub type Shape = [Position; 4];

/// Number of catalog entries (7 kinds x 4 rotations).
pub const SHAPE_COUNT: usize = 28;

/// Number of distinct tetromino kinds.
pub const KIND_COUNT: u8 = 7;

const fn p(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

/// The full catalog. The square repeats its single geometry four times so
/// every kind occupies a uniform 4-entry rotation group.
pub const SHAPES: [Shape; SHAPE_COUNT] = [
    // square
    [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    // J
    [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)],
    [p(0, -1), p(0, 0), p(0, 1), p(1, 1)],
    [p(-1, 0), p(0, 0), p(1, 0), p(1, -1)],
    [p(-1, -1), p(0, -1), p(0, 0), p(0, 1)],
    // L
    [p(-1, 0), p(0, 0), p(1, 0), p(1, 1)],
    [p(0, 1), p(0, 0), p(0, -1), p(1, -1)],
    [p(-1, -1), p(-1, 0), p(0, 0), p(1, 0)],
    [p(-1, 1), p(0, 1), p(0, 0), p(0, -1)],
    // S
    [p(-1, 0), p(0, 0), p(0, -1), p(1, -1)],
    [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
    [p(-1, 1), p(0, 1), p(0, 0), p(1, 0)],
    [p(-1, -1), p(-1, 0), p(0, 0), p(0, 1)],
    // T
    [p(-1, 0), p(0, 0), p(0, -1), p(1, 0)],
    [p(0, -1), p(0, 0), p(0, 1), p(1, 0)],
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 0)],
    [p(-1, 0), p(0, -1), p(0, 0), p(0, 1)],
    // Z
    [p(-1, -1), p(0, -1), p(0, 0), p(1, 0)],
    [p(0, 1), p(0, 0), p(1, 0), p(1, -1)],
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
    [p(-1, 1), p(-1, 0), p(0, 0), p(0, -1)],
    // I
    [p(-2, 0), p(-1, 0), p(0, 0), p(1, 0)],
    [p(0, 2), p(0, 1), p(0, 0), p(0, -1)],
    [p(-2, 1), p(-1, 1), p(0, 1), p(1, 1)],
    [p(-1, -2), p(-1, -1), p(-1, 0), p(-1, 1)],
];

/// Geometry for a catalog index. Out-of-range indices wrap rather than read
/// out of bounds; callers produce indices via group arithmetic so this is
/// only a guard.
pub fn shape(index: u8) -> Shape {
    SHAPES[index as usize % SHAPE_COUNT]
}

/// Catalog index of the spawn rotation for a tetromino kind.
pub fn kind_base(kind: u8) -> u8 {
    (kind % KIND_COUNT) * 4
}

/// Next rotation of the same kind: keep the group bits, advance the
/// within-group field mod 4.
pub fn rotated(index: u8) -> u8 {
    (index & !0x03) | (index.wrapping_add(1) & 0x03)
}
