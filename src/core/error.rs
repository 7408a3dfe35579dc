//! Error types for engine operations.
//!
//! Errors cover setup misuse and failed lookups only. Normal negative
//! gameplay outcomes - insufficient funds, a space that is already owned,
//! a move requested for an eliminated player - are expected results and
//! come back as `false` or [`MoveOutcome`](crate::engine::MoveOutcome)
//! variants, never as errors.

use thiserror::Error;

/// Errors that can occur while setting up or querying a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// No player with this name exists in the registry.
    #[error("no player named {name:?}")]
    PlayerNotFound { name: String },

    /// The space number is past the end of the track.
    #[error("no space numbered {space}")]
    SpaceNotFound { space: u16 },

    /// A player with this name was already created.
    #[error("a player named {name:?} already exists")]
    DuplicatePlayer { name: String },

    /// `create_spaces` was called a second time.
    #[error("the board has already been created")]
    BoardAlreadyBuilt,

    /// A game operation ran before `create_spaces`.
    #[error("the board has not been created yet")]
    BoardNotBuilt,

    /// The board needs at least one rent space besides GO.
    #[error("cannot create a board with no rent spaces")]
    EmptyBoard,
}

/// Result type alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;
