//! Game state and the active-piece lifecycle.
//!
//! `GameState` aggregates the board, the falling piece, the score, and the
//! sticky input sample. There are no ambient globals: the game loop owns one
//! `GameState` and drives it through these operations once per frame.
//!
//! Per-frame lifecycle: accumulate input, then either `advance` (piece can
//! still fall) or lock / clear lines / spawn (it cannot). A piece whose
//! anchor is still at or above the top of the playfield when it stops
//! falling ends the game.

use crate::core::board::Board;
use crate::core::collide::would_collide;
use crate::core::lines::clear_one_full_row;
use crate::core::rng::ShapePicker;
use crate::core::shapes::{kind_base, rotated, shape, Shape};
use crate::types::{Buttons, Position, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

const FALL: Position = Position::new(0, -1);
const STILL: Position = Position::new(0, 0);
const LEFT: Position = Position::new(-1, 0);
const RIGHT: Position = Position::new(1, 0);

/// Extra point on top of the four credited lines for clearing four at once.
const TETRIS_BONUS: u32 = 1;

/// Complete gameplay state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    shape_index: u8,
    position: Position,
    score: u32,
    buttons: Buttons,
    game_over: bool,
}

impl GameState {
    /// New game: empty board, the square piece at the spawn anchor.
    /// (The first piece is always the square; every later piece comes from
    /// the `ShapePicker` handed to `spawn`.)
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            shape_index: 0,
            position: Position::new(SPAWN_X, SPAWN_Y),
            score: 0,
            buttons: Buttons::empty(),
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for fixtures and tools. Gameplay mutations go
    /// through the piece lifecycle, not through this.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shape_index(&self) -> u8 {
        self.shape_index
    }

    /// Geometry of the active piece.
    pub fn active_shape(&self) -> Shape {
        shape(self.shape_index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Fold one input sample into the sticky set. May be called several
    /// times per frame; `advance` drains the accumulated set once.
    pub fn accumulate(&mut self, sample: Buttons) {
        self.buttons.insert(sample);
    }

    /// Can the piece fall one more row?
    pub fn can_fall(&self) -> bool {
        !would_collide(&self.board, &self.active_shape(), self.position, FALL)
    }

    /// Has the stack filled the playfield? Checked when the piece can no
    /// longer fall: an anchor still at or above the top row means game over.
    pub fn at_top(&self) -> bool {
        self.position.y >= BOARD_HEIGHT as i8
    }

    /// One falling step: drain the sticky input, apply a horizontal move and
    /// a rotation if requested and unobstructed, then drop the anchor a row.
    /// Callers must have checked `can_fall` first.
    pub fn advance(&mut self) {
        let buttons = self.buttons.take();

        if buttons.contains(Buttons::LEFT) {
            if !would_collide(&self.board, &self.active_shape(), self.position, LEFT) {
                self.position.x -= 1;
            }
        } else if buttons.contains(Buttons::RIGHT)
            && !would_collide(&self.board, &self.active_shape(), self.position, RIGHT)
        {
            self.position.x += 1;
        }

        if buttons.contains(Buttons::ROTATE) {
            self.shape_index = self.try_rotation();
        }

        self.position.y -= 1;
    }

    /// Candidate next rotation, validated before anything mutates: returns
    /// the advanced index when the rotated piece fits, otherwise the current
    /// index unchanged. No wall kick is attempted.
    fn try_rotation(&self) -> u8 {
        let candidate = rotated(self.shape_index);
        if would_collide(&self.board, &shape(candidate), self.position, STILL) {
            self.shape_index
        } else {
            candidate
        }
    }

    /// Permanently merge the active piece's pixels into the board.
    pub fn lock(&mut self) {
        self.merge_piece();
    }

    /// OR the active piece into the board. Pixels outside the stored rows
    /// (a freshly spawned piece starts above them) are skipped; the rest of
    /// the piece is still written.
    pub fn merge_piece(&mut self) {
        self.for_each_onboard_pixel(|board, x, y| board.set(x, y, true));
    }

    /// Remove the transient piece bits again, restoring the invariant that
    /// only locked cells persist on the board.
    pub fn unmerge_piece(&mut self) {
        self.for_each_onboard_pixel(|board, x, y| board.set(x, y, false));
    }

    fn for_each_onboard_pixel(&mut self, mut apply: impl FnMut(&mut Board, u8, u8)) {
        for offset in self.active_shape() {
            let x = self.position.x + offset.x;
            let y = self.position.y + offset.y;
            if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
                continue;
            }
            apply(&mut self.board, x as u8, y as u8);
        }
    }

    /// Remove the first row completed by the last lock and credit one
    /// point. Returns the removed row index, or `None` when no full row
    /// remains, so the caller can redraw between removals and show the
    /// compaction as a row-by-row collapse.
    pub fn clear_one_line(&mut self) -> Option<u8> {
        let row = clear_one_full_row(&mut self.board, self.position.y)?;
        self.score += 1;
        Some(row)
    }

    /// Extra point when a single lock cleared four rows at once.
    pub fn credit_tetris_bonus(&mut self, cleared: u8) {
        if cleared == 4 {
            self.score += TETRIS_BONUS;
        }
    }

    /// Compact every row completed by the last lock in one pass and credit
    /// the score. Returns the number of lines cleared.
    pub fn clear_lines(&mut self) -> u8 {
        let mut count = 0;
        while self.clear_one_line().is_some() {
            count += 1;
        }
        self.credit_tetris_bonus(count);
        count
    }

    /// Spawn the next piece at the fixed anchor. The fresh placement is
    /// validated immediately; a spawn that already overlaps the settled
    /// stack is game over (without this check the piece would visibly fall
    /// one frame while overlapping).
    pub fn spawn(&mut self, picker: &mut impl ShapePicker) -> bool {
        self.shape_index = kind_base(picker.pick_kind());
        self.position = Position::new(SPAWN_X, SPAWN_Y);

        if would_collide(&self.board, &self.active_shape(), self.position, STILL) {
            self.game_over = true;
            return false;
        }

        true
    }

    /// Terminal transition: wipe the board and stop the game.
    pub fn end(&mut self) {
        self.board.clear();
        self.game_over = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedPicker;

    fn square_at(x: i8, y: i8) -> GameState {
        let mut game = GameState::new();
        game.position = Position::new(x, y);
        game
    }

    #[test]
    fn test_new_game_holds_square_at_spawn() {
        let game = GameState::new();
        assert_eq!(game.shape_index(), 0);
        assert_eq!(game.position(), Position::new(SPAWN_X, SPAWN_Y));
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
    }

    #[test]
    fn test_advance_falls_one_row() {
        let mut game = square_at(3, 10);
        game.advance();
        assert_eq!(game.position(), Position::new(3, 9));
    }

    #[test]
    fn test_advance_applies_pending_left_move() {
        let mut game = square_at(3, 10);
        game.accumulate(Buttons::LEFT);
        game.advance();
        assert_eq!(game.position(), Position::new(2, 9));
    }

    #[test]
    fn test_left_wins_when_both_directions_pressed() {
        let mut game = square_at(3, 10);
        game.accumulate(Buttons::LEFT | Buttons::RIGHT);
        game.advance();
        assert_eq!(game.position().x, 2);
    }

    #[test]
    fn test_blocked_move_is_dropped_not_deferred() {
        let mut game = square_at(0, 10);
        game.accumulate(Buttons::LEFT);
        game.advance();
        assert_eq!(game.position().x, 0);

        // The request must not linger into the next frame.
        game.advance();
        assert_eq!(game.position().x, 0);
    }

    #[test]
    fn test_sticky_input_survives_multiple_samples_until_drained() {
        let mut game = square_at(3, 10);
        game.accumulate(Buttons::empty());
        game.accumulate(Buttons::RIGHT);
        game.accumulate(Buttons::empty());
        game.advance();
        assert_eq!(game.position().x, 4);

        // Drained: no further effect.
        game.advance();
        assert_eq!(game.position().x, 4);
    }

    #[test]
    fn test_four_rotations_restore_shape_index() {
        let mut game = GameState::new();
        game.shape_index = kind_base(4); // T
        game.position = Position::new(4, 10);

        let start = game.shape_index();
        for _ in 0..4 {
            game.accumulate(Buttons::ROTATE);
            game.advance();
        }
        assert_eq!(game.shape_index(), start);
    }

    #[test]
    fn test_rejected_rotation_fully_restores_index() {
        let mut game = GameState::new();
        game.shape_index = kind_base(6); // I, horizontal spans x-2..x+1
        game.position = Position::new(4, 1);

        // Wall the piece in so the vertical rotation (spans y-1..y+2 at
        // x = anchor) collides with a filled cell above.
        game.board.set(4, 3, true);

        let before = game.shape_index();
        game.accumulate(Buttons::ROTATE);
        game.advance();
        assert_eq!(game.shape_index(), before, "rejected rotation must not advance");

        // Repeated attempts with the same obstruction stay at the start
        // index, not part-way through the group.
        for _ in 0..3 {
            game.position = Position::new(4, 1);
            game.accumulate(Buttons::ROTATE);
            game.advance();
        }
        assert_eq!(game.shape_index(), before);
    }

    #[test]
    fn test_lock_touches_only_the_covered_cells() {
        let mut game = square_at(3, 5);
        game.board.set(0, 0, true);

        game.lock();

        assert!(game.board().occupied(3, 5));
        assert!(game.board().occupied(4, 5));
        assert!(game.board().occupied(3, 6));
        assert!(game.board().occupied(4, 6));
        assert!(game.board().occupied(0, 0), "pre-existing cell untouched");

        let mut set_cells = 0;
        for y in 0..BOARD_HEIGHT {
            set_cells += game.board().row(y).count_ones();
        }
        assert_eq!(set_cells, 5);
    }

    #[test]
    fn test_merge_skips_pixels_above_stored_rows() {
        let mut game = square_at(SPAWN_X, SPAWN_Y);
        game.merge_piece();
        for y in 0..BOARD_HEIGHT {
            assert_eq!(game.board().row(y), 0, "nothing may be written on-board");
        }
    }

    #[test]
    fn test_unmerge_restores_locked_only_invariant() {
        let mut game = square_at(3, 5);
        game.board.set(0, 0, true);

        game.merge_piece();
        game.unmerge_piece();

        for y in 1..BOARD_HEIGHT {
            assert_eq!(game.board().row(y), 0);
        }
        assert!(game.board().occupied(0, 0));
    }

    #[test]
    fn test_clear_lines_scores_one_per_line() {
        let mut game = square_at(3, 0);
        for x in 0..BOARD_WIDTH {
            if x != 3 && x != 4 {
                game.board.set(x, 0, true);
                game.board.set(x, 1, true);
            }
        }
        game.lock();

        let cleared = game.clear_lines();
        assert_eq!(cleared, 2);
        assert_eq!(game.score(), 2);
        assert_eq!(game.board().row(0), 0);
        assert_eq!(game.board().row(1), 0);
    }

    #[test]
    fn test_clear_one_line_steps_through_a_multi_row_clear() {
        let mut game = square_at(3, 0);
        for x in 0..BOARD_WIDTH {
            if x != 3 && x != 4 {
                game.board.set(x, 0, true);
                game.board.set(x, 1, true);
            }
        }
        game.lock();

        // One row per call, one point per call, with the intermediate board
        // state observable between the two.
        assert_eq!(game.clear_one_line(), Some(0));
        assert!(game.board().is_row_full(0), "second full row dropped down");
        assert_eq!(game.score(), 1);

        assert_eq!(game.clear_one_line(), Some(0));
        assert_eq!(game.clear_one_line(), None);
        assert_eq!(game.score(), 2);
        assert_eq!(game.board().row(0), 0);
    }

    #[test]
    fn test_tetris_awards_bonus_point() {
        let mut game = square_at(3, 0);
        for y in 0..4 {
            for x in 0..BOARD_WIDTH {
                game.board.set(x, y, true);
            }
        }

        let cleared = game.clear_lines();
        assert_eq!(cleared, 4);
        assert_eq!(game.score(), 5, "four lines plus the tetris bonus");
    }

    #[test]
    fn test_spawn_picks_kind_group_base() {
        let mut game = GameState::new();
        let mut picker = ScriptedPicker::new(vec![5]);
        assert!(game.spawn(&mut picker));
        assert_eq!(game.shape_index(), 20, "kind 5 spawns at catalog index 20");
        assert_eq!(game.position(), Position::new(SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn test_spawn_above_full_stack_is_still_valid() {
        // The spawn anchor sits above the stored rows, and pixels above the
        // playfield never collide, so even a completely full board accepts a
        // spawn. Game over is detected when the piece stops falling with its
        // anchor still at the top, not at spawn time.
        let mut game = GameState::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                game.board.set(x, y, true);
            }
        }

        let mut picker = ScriptedPicker::new(vec![0]);
        assert!(game.spawn(&mut picker));
        assert!(!game.game_over());
        assert!(!game.can_fall() || game.position().y > BOARD_HEIGHT as i8);
    }

    #[test]
    fn test_at_top_when_anchor_reaches_playfield_ceiling() {
        let game = square_at(3, BOARD_HEIGHT as i8);
        assert!(game.at_top());
        let game = square_at(3, BOARD_HEIGHT as i8 - 1);
        assert!(!game.at_top());
    }

    #[test]
    fn test_end_wipes_board_and_stops_game() {
        let mut game = square_at(3, 5);
        game.lock();
        game.end();

        assert!(game.game_over());
        for y in 0..BOARD_HEIGHT {
            assert_eq!(game.board().row(y), 0);
        }
    }

    #[test]
    fn test_piece_falls_until_grounded() {
        let mut game = square_at(3, 10);
        let mut steps = 0;
        while game.can_fall() {
            game.advance();
            steps += 1;
        }
        assert_eq!(steps, 10);
        assert_eq!(game.position().y, 0);
    }
}
