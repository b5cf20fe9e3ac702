//! Rules engine for a falling-block puzzle game.
//!
//! The engine owns the playfield grid, the active falling piece, the score,
//! and the game phase. All inputs are total: a move or rotation that would
//! collide is rejected as a no-op rather than an error, and the only terminal
//! condition is [`Phase::GameOver`], reached when a freshly spawned piece has
//! no valid initial placement.
//!
//! Rendering, key handling, and the gravity timer are external collaborators;
//! they drive the engine through [`Game`] and read its state back through
//! getters between transitions.
//!
//! # Example
//!
//! ```
//! use gridfall_engine::{Game, PieceSpawner};
//!
//! let mut game = Game::new(PieceSpawner::from_seed(42));
//!
//! game.request_move(-1, 0); // player input
//! game.request_rotate();
//! game.request_move(0, 1); // gravity tick
//!
//! assert!(game.phase().is_active());
//! ```

pub use self::{catalog::*, core::*, engine::*};

pub mod catalog;
pub mod core;
pub mod engine;
