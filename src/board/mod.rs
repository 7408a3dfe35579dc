//! The board: spaces and the circular track.
//!
//! A board is GO at index 0 followed by one space per rent value, built once
//! at setup. Its size never changes afterwards; only per-space ownership
//! does.

mod space;
mod track;

pub use space::{Space, SpaceId, PRICE_MULTIPLIER};
pub use track::Board;
