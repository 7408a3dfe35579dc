//! The circular track of spaces.

use serde::{Deserialize, Serialize};

use crate::board::space::{Space, SpaceId};
use crate::core::error::{GameError, GameResult};

/// Ordered sequence of spaces: GO at index 0, then one space per rent value.
///
/// Built once at setup and fixed in size thereafter. The one-shot guard
/// against rebuilding lives in the engine, which holds the board as an
/// `Option`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Build a board from the pass-GO bonus and the rent of each space.
    pub fn new(go_bonus: i64, rents: &[i64]) -> GameResult<Self> {
        if rents.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        assert!(rents.len() < u16::MAX as usize, "At most 65534 rent spaces supported");

        let mut spaces = Vec::with_capacity(rents.len() + 1);
        spaces.push(Space::new(SpaceId::GO, go_bonus));
        for (i, &rent) in rents.iter().enumerate() {
            spaces.push(Space::new(SpaceId::new(i as u16 + 1), rent));
        }
        Ok(Self { spaces })
    }

    /// Number of spaces including GO.
    #[must_use]
    pub fn track_length(&self) -> usize {
        self.spaces.len()
    }

    /// The bonus credited for landing on or passing GO.
    #[must_use]
    pub fn go_bonus(&self) -> i64 {
        self.spaces[0].rent()
    }

    /// Look up a space by number. O(1): the number is the index.
    pub fn space(&self, id: SpaceId) -> GameResult<&Space> {
        self.spaces
            .get(id.index())
            .ok_or(GameError::SpaceNotFound { space: id.0 })
    }

    pub(crate) fn space_mut(&mut self, id: SpaceId) -> GameResult<&mut Space> {
        self.spaces
            .get_mut(id.index())
            .ok_or(GameError::SpaceNotFound { space: id.0 })
    }

    /// Iterate over all spaces in track order, GO first.
    pub fn spaces(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_layout() {
        let board = Board::new(50, &[100, 150, 200]).unwrap();

        assert_eq!(board.track_length(), 4);
        assert_eq!(board.go_bonus(), 50);
        assert_eq!(board.space(SpaceId::GO).unwrap().rent(), 50);
        assert_eq!(board.space(SpaceId::new(2)).unwrap().rent(), 150);
        assert!(board.spaces().all(|s| s.owner().is_none()));
    }

    #[test]
    fn test_empty_rents_rejected() {
        assert!(matches!(Board::new(50, &[]), Err(GameError::EmptyBoard)));
    }

    #[test]
    fn test_lookup_past_end_is_explicit() {
        let board = Board::new(50, &[100]).unwrap();
        assert!(matches!(
            board.space(SpaceId::new(2)),
            Err(GameError::SpaceNotFound { space: 2 })
        ));
    }
}
