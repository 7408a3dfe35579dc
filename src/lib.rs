//! # realty-engine
//!
//! A turn-resolution engine for a simplified Monopoly-style board game:
//! players circle a track of rent spaces, buy what is unowned, pay rent to
//! owners, and the game ends when at most one player still has money.
//!
//! ## Design Principles
//!
//! 1. **One engine, one game**: a [`GameEngine`] owns its board and its
//!    player registry. There are no ambient singletons; a multi-session
//!    host would hold one engine per session.
//!
//! 2. **Typed ownership**: spaces record their owner as an
//!    `Option<PlayerId>`, never as a name string. Ownership checks are id
//!    comparisons.
//!
//! 3. **Negative outcomes are values, not errors**: an eliminated player
//!    asked to move, a space nobody can afford, a purchase of GO - these
//!    return [`MoveOutcome::Skipped`] or `false`. Errors are reserved for
//!    setup misuse and failed lookups.
//!
//! 4. **The driver supplies the dice**: `move_player` takes the step count,
//!    so every turn is replayable. [`DiceRng`] exists for drivers that want
//!    seeded rolls.
//!
//! ## Modules
//!
//! - `core`: Player identity, the registry, errors, dice
//! - `board`: Spaces and the circular track
//! - `engine`: Turn resolution (move, buy, game-over detection)

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::board::{Board, Space, SpaceId};
pub use crate::core::{DiceRng, GameError, GameResult, Player, PlayerId, PlayerRegistry};
pub use crate::engine::{GameEngine, MoveOutcome};
