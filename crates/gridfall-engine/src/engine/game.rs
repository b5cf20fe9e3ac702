use derive_more::IsVariant;

use crate::{
    catalog::PieceSpawner,
    core::{Grid, Piece},
    engine::score::ScoreTracker,
};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Phase {
    /// A piece is falling and inputs are accepted.
    Active,
    /// Frozen mid-game; only unpause and reset are accepted.
    Paused,
    /// A spawned piece had no valid placement. Terminal until reset.
    GameOver,
}

/// One game of falling blocks: grid, falling piece, score, and phase.
///
/// Every input is total. Moves and rotations that would collide are rejected
/// as no-ops and reported through the `bool` return, never as errors. A
/// rejected straight-down move is the landing signal: the piece is merged
/// into the grid, complete lines are cleared and scored, and the next piece
/// spawns, all within that one call.
#[derive(Debug)]
pub struct Game {
    grid: Grid,
    falling: Option<Piece>,
    spawner: PieceSpawner,
    score: ScoreTracker,
    phase: Phase,
}

impl Game {
    /// Starts a game with an empty grid and the first piece already spawned.
    #[must_use]
    pub fn new(spawner: PieceSpawner) -> Self {
        let mut game = Self {
            grid: Grid::EMPTY,
            falling: None,
            spawner,
            score: ScoreTracker::default(),
            phase: Phase::Active,
        };
        game.spawn_next();
        game
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The currently falling piece. `None` once the game is over.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score.score()
    }

    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.score.lines_cleared()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tries to translate the falling piece by `(dx, dy)`.
    ///
    /// Returns whether the piece moved. A rejected straight-down move means
    /// the piece has landed and triggers the lock sequence; any other
    /// rejection leaves the game untouched. Ignored unless the game is
    /// active.
    pub fn request_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        let Some(piece) = &self.falling else {
            return false;
        };
        let candidate = piece.moved(dx, dy);
        if self.grid.fits(candidate.shape(), candidate.x(), candidate.y()) {
            self.falling = Some(candidate);
            return true;
        }
        if dx == 0 && dy > 0 {
            self.lock_falling();
        }
        false
    }

    /// Tries to rotate the falling piece 90° clockwise.
    ///
    /// Returns whether the rotation was applied. There is no kick search: a
    /// rotation that would collide is rejected outright. Ignored unless the
    /// game is active.
    pub fn request_rotate(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        let Some(piece) = &self.falling else {
            return false;
        };
        let candidate = piece.rotated();
        if self.grid.fits(candidate.shape(), candidate.x(), candidate.y()) {
            self.falling = Some(candidate);
            return true;
        }
        false
    }

    /// Flips between [`Phase::Active`] and [`Phase::Paused`].
    ///
    /// Returns whether the phase changed; a finished game stays finished.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Active => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Active;
                true
            }
            Phase::GameOver => false,
        }
    }

    /// Abandons the current game and starts a fresh one.
    ///
    /// The spawner keeps its random stream, so a seeded game's piece sequence
    /// continues rather than restarting.
    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.falling = None;
        self.score = ScoreTracker::default();
        self.phase = Phase::Active;
        self.spawn_next();
    }

    /// Merges the landed piece, clears and scores complete lines, then
    /// spawns the next piece.
    fn lock_falling(&mut self) {
        let Some(piece) = self.falling.take() else {
            return;
        };
        let merged = self.grid.merged(&piece);
        let (cleared, lines) = merged.cleared();
        self.grid = cleared;
        self.score.record_clear(lines);
        self.spawn_next();
    }

    /// Draws the next piece. If its initial placement collides with the
    /// settled grid, the game is over and no piece is left falling.
    fn spawn_next(&mut self) {
        let piece = self.spawner.spawn();
        if self.grid.fits(piece.shape(), piece.x(), piece.y()) {
            self.falling = Some(piece);
        } else {
            self.falling = None;
            self.phase = Phase::GameOver;
        }
    }

    /// Replaces the falling piece, for building test fixtures.
    #[cfg(test)]
    pub(crate) fn set_falling(&mut self, piece: Piece) {
        self.falling = Some(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GRID_HEIGHT, GRID_WIDTH, Shape, ShapeColor};

    const C: bool = true;
    const E: bool = false;

    fn game() -> Game {
        Game::new(PieceSpawner::from_seed(42))
    }

    fn bar_at(x: i8, y: i8) -> Piece {
        Piece::new(Shape::from_pattern(&[&[C, C, C, C]]), ShapeColor::Cyan, x, y)
    }

    #[test]
    fn test_new_game_starts_active_with_a_piece() {
        let game = game();
        assert!(game.phase().is_active());
        assert!(game.falling_piece().is_some());
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines_cleared(), 0);
        assert!(game.grid().rows().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_move_within_bounds() {
        let mut game = game();
        game.set_falling(bar_at(3, 0));
        assert!(game.request_move(-1, 0));
        assert!(game.request_move(0, 1));
        let piece = game.falling_piece().unwrap();
        assert_eq!((piece.x(), piece.y()), (2, 1));
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut game = game();
        game.set_falling(bar_at(0, 5));
        assert!(!game.request_move(-1, 0));
        let piece = game.falling_piece().unwrap();
        assert_eq!((piece.x(), piece.y()), (0, 5));

        game.set_falling(bar_at(6, 5));
        assert!(!game.request_move(1, 0));
        assert_eq!(game.falling_piece().unwrap().x(), 6);
        assert!(game.phase().is_active());
    }

    #[test]
    fn test_blocked_rotation_is_noop() {
        let mut game = game();
        // Rotating the bar here would reach below the floor.
        game.set_falling(bar_at(3, 17));
        assert!(!game.request_rotate());
        let piece = game.falling_piece().unwrap();
        assert_eq!(piece.shape().width(), 4);
        assert_eq!((piece.x(), piece.y()), (3, 17));
    }

    #[test]
    fn test_rotation_applies_when_clear() {
        let mut game = game();
        game.set_falling(bar_at(3, 5));
        assert!(game.request_rotate());
        let piece = game.falling_piece().unwrap();
        assert_eq!(piece.shape().width(), 1);
        assert_eq!(piece.shape().height(), 4);
    }

    #[test]
    fn test_failed_descent_locks_and_respawns() {
        let mut game = game();
        game.set_falling(bar_at(3, 19));
        assert!(!game.request_move(0, 1));

        // The bar settled on the floor.
        for x in 3..7 {
            assert_eq!(game.grid().cell(x, 19), Some(ShapeColor::Cyan));
        }
        // A fresh piece spawned at the top.
        let next = game.falling_piece().unwrap();
        assert_eq!(next.y(), 0);
        assert!(game.phase().is_active());
    }

    #[test]
    fn test_bar_descends_to_floor_in_19_steps() {
        let mut game = game();
        game.set_falling(bar_at(3, 0));
        for _ in 0..19 {
            assert!(game.request_move(0, 1));
        }
        assert_eq!(game.falling_piece().unwrap().y(), 19);

        // The 20th step is blocked by the floor and locks the bar.
        assert!(!game.request_move(0, 1));
        let floor_row: Vec<bool> = (0..GRID_WIDTH)
            .map(|x| game.grid().cell(x, 19).is_some())
            .collect();
        let expected = [false, false, false, true, true, true, true, false, false, false];
        assert_eq!(floor_row, expected);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_failed_horizontal_move_does_not_lock() {
        let mut game = game();
        game.set_falling(bar_at(6, 19));
        assert!(!game.request_move(1, 0));
        // Still falling, nothing merged.
        assert_eq!(game.falling_piece().unwrap().y(), 19);
        assert!(game.grid().rows().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_completing_a_row_clears_and_scores() {
        let mut game = game();
        for x in 0..6 {
            game.grid.set(x, 19, Some(ShapeColor::Green));
        }
        game.grid.set(0, 18, Some(ShapeColor::Purple));
        game.set_falling(bar_at(6, 0));

        while game.request_move(0, 1) {}

        assert_eq!(game.score(), 100);
        assert_eq!(game.lines_cleared(), 1);
        // The marker above the cleared row shifted down onto the floor.
        assert_eq!(game.grid().cell(0, 19), Some(ShapeColor::Purple));
        for x in 1..GRID_WIDTH {
            assert_eq!(game.grid().cell(x, 19), None);
        }
        assert!(game.phase().is_active());
    }

    #[test]
    fn test_incomplete_row_scores_nothing() {
        let mut game = game();
        game.set_falling(bar_at(0, 0));
        while game.request_move(0, 1) {}
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().cell(0, 19), Some(ShapeColor::Cyan));
    }

    #[test]
    fn test_pause_gates_inputs() {
        let mut game = game();
        game.set_falling(bar_at(3, 5));
        assert!(game.toggle_pause());
        assert!(game.phase().is_paused());

        assert!(!game.request_move(0, 1));
        assert!(!game.request_rotate());
        let piece = game.falling_piece().unwrap();
        assert_eq!((piece.x(), piece.y()), (3, 5));
        assert_eq!(piece.shape().width(), 4);

        assert!(game.toggle_pause());
        assert!(game.phase().is_active());
        assert!(game.request_move(0, 1));
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut game = game();
        // Wall off the spawn area without completing any row.
        for x in 3..7 {
            game.grid.set(x, 0, Some(ShapeColor::Red));
            game.grid.set(x, 1, Some(ShapeColor::Red));
        }
        game.set_falling(bar_at(0, 19));
        assert!(!game.request_move(0, 1));

        assert!(game.phase().is_game_over());
        assert!(game.falling_piece().is_none());
    }

    #[test]
    fn test_game_over_rejects_everything_but_reset() {
        let mut game = game();
        for x in 3..7 {
            game.grid.set(x, 0, Some(ShapeColor::Red));
            game.grid.set(x, 1, Some(ShapeColor::Red));
        }
        game.set_falling(bar_at(0, 19));
        game.request_move(0, 1);
        assert!(game.phase().is_game_over());

        assert!(!game.request_move(-1, 0));
        assert!(!game.request_rotate());
        assert!(!game.toggle_pause());
        assert!(game.phase().is_game_over());

        game.reset();
        assert!(game.phase().is_active());
        assert!(game.falling_piece().is_some());
        assert!(game.grid().rows().all(|row| row.iter().all(Option::is_none)));
    }

    #[test]
    fn test_reset_clears_score_and_grid() {
        let mut game = game();
        game.set_falling(bar_at(0, 19));
        game.request_move(0, 1);
        assert!(game.grid().rows().any(|row| row.iter().any(Option::is_some)));

        game.reset();
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines_cleared(), 0);
        assert!(game.grid().rows().all(|row| row.iter().all(Option::is_none)));
        assert_eq!(game.falling_piece().unwrap().y(), 0);
    }

    #[test]
    fn test_pieces_stack_on_each_other() {
        let mut game = game();
        game.set_falling(bar_at(3, 0));
        while game.request_move(0, 1) {}
        game.set_falling(bar_at(3, 0));
        while game.request_move(0, 1) {}

        let bottom = GRID_HEIGHT - 1;
        for x in 3..7 {
            assert_eq!(game.grid().cell(x, bottom), Some(ShapeColor::Cyan));
            assert_eq!(game.grid().cell(x, bottom - 1), Some(ShapeColor::Cyan));
        }
    }
}
