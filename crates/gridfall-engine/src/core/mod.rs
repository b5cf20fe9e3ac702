//! Core data structures: grid, shape, and piece.
//!
//! These types carry the geometric content of the game and are free of any
//! orchestration logic. Grids and shapes are value-semantic snapshots:
//! transformations produce new values and never mutate their input.

pub use self::{grid::*, piece::*, shape::*};

pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod shape;

/// Playfield width in cells.
pub const GRID_WIDTH: usize = 10;

/// Playfield height in cells.
pub const GRID_HEIGHT: usize = 20;
