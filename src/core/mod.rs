//! Core engine types: player identity, the registry, errors, dice.
//!
//! Everything here is board-agnostic. The board and the turn logic live in
//! their own modules and build on these types.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{GameError, GameResult};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use rng::DiceRng;
