//! Game orchestration: the phase machine and scoring.

pub use self::{game::*, score::*};

pub(crate) mod game;
pub(crate) mod score;
