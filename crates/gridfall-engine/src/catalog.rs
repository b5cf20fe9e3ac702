//! The seven-piece catalog and the random spawner that draws from it.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::core::{GRID_WIDTH, Piece, Shape, ShapeColor};

const C: bool = true;
const E: bool = false;

/// The canonical piece set, paired with the color each piece settles as.
const CATALOG: [(&[&[bool]], ShapeColor); 7] = [
    (&[&[C, C, C, C]], ShapeColor::Cyan),
    (&[&[C, C], &[C, C]], ShapeColor::Yellow),
    (&[&[E, C, C], &[C, C, E]], ShapeColor::Green),
    (&[&[C, C, E], &[E, C, C]], ShapeColor::Red),
    (&[&[C, E, E], &[C, C, C]], ShapeColor::Blue),
    (&[&[E, E, C], &[C, C, C]], ShapeColor::Orange),
    (&[&[E, C, E], &[C, C, C]], ShapeColor::Purple),
];

/// Draws new falling pieces uniformly at random from the catalog.
///
/// Each draw is independent; there is no bag or history. The spawner is the
/// engine's only source of randomness, so seeding it makes a whole game
/// deterministic.
#[derive(Debug)]
pub struct PieceSpawner {
    rng: StdRng,
}

impl PieceSpawner {
    /// Creates a spawner seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a spawner with a fixed seed, for reproducible games.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the next piece, horizontally centered at the top of the board.
    ///
    /// The returned piece has not been validated against any grid; the game
    /// checks its initial placement and declares game over if it collides.
    pub fn spawn(&mut self) -> Piece {
        let (pattern, color) = CATALOG[self.rng.random_range(0..CATALOG.len())];
        let shape = Shape::from_pattern(pattern);
        let x = spawn_column(shape.width());
        Piece::new(shape, color, x, 0)
    }
}

impl Default for PieceSpawner {
    fn default() -> Self {
        Self::new()
    }
}

// Both operands are at most GRID_WIDTH / 2, far below i8::MAX.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn spawn_column(width: usize) -> i8 {
    (GRID_WIDTH / 2 - width / 2) as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;

    #[test]
    fn test_spawn_is_centered_at_top() {
        let mut spawner = PieceSpawner::from_seed(7);
        for _ in 0..50 {
            let piece = spawner.spawn();
            assert_eq!(piece.y(), 0);
            assert_eq!(piece.x(), spawn_column(piece.shape().width()));
        }
    }

    #[test]
    fn test_spawn_fits_empty_grid() {
        let grid = Grid::EMPTY;
        let mut spawner = PieceSpawner::from_seed(11);
        for _ in 0..50 {
            let piece = spawner.spawn();
            assert!(grid.fits(piece.shape(), piece.x(), piece.y()));
        }
    }

    #[test]
    fn test_seeded_spawners_agree() {
        let mut a = PieceSpawner::from_seed(42);
        let mut b = PieceSpawner::from_seed(42);
        for _ in 0..20 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = PieceSpawner::from_seed(1);
        let mut b = PieceSpawner::from_seed(2);
        let draws_a: Vec<_> = (0..20).map(|_| a.spawn().color()).collect();
        let draws_b: Vec<_> = (0..20).map(|_| b.spawn().color()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_catalog_covers_all_colors() {
        let mut spawner = PieceSpawner::from_seed(3);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let color = spawner.spawn().color();
            if !seen.contains(&color) {
                seen.push(color);
            }
        }
        assert_eq!(seen.len(), CATALOG.len());
    }
}
