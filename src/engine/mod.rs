//! Turn resolution: movement, purchases, rent settlement, game-over
//! detection.

mod game;

pub use game::{GameEngine, MoveOutcome};
