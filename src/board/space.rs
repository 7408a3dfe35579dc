//! Individual spaces on the track.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Purchase price of a space is this multiple of its rent.
pub const PRICE_MULTIPLIER: i64 = 5;

/// Space number on the track.
///
/// Equal to the board index, so lookup is a direct indexing operation.
/// `SpaceId::GO` is space 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u16);

impl SpaceId {
    /// The GO space.
    pub const GO: SpaceId = SpaceId(0);

    /// Create a new space ID.
    #[must_use]
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the GO space.
    #[must_use]
    pub const fn is_go(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_go() {
            write!(f, "GO")
        } else {
            write!(f, "Space {}", self.0)
        }
    }
}

/// One space on the board.
///
/// For GO the `rent` field holds the pass-GO bonus - it is never payable
/// and GO never acquires an owner. Every other space starts unowned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    rent: i64,
    owner: Option<PlayerId>,
}

impl Space {
    pub(crate) fn new(id: SpaceId, rent: i64) -> Self {
        Self { id, rent, owner: None }
    }

    /// This space's number.
    #[must_use]
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Rent charged to visitors (the pass-GO bonus for GO).
    #[must_use]
    pub fn rent(&self) -> i64 {
        self.rent
    }

    /// Current owner, if any. Always `None` for GO.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Purchase price: [`PRICE_MULTIPLIER`] times the rent.
    #[must_use]
    pub fn price(&self) -> i64 {
        self.rent * PRICE_MULTIPLIER
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        debug_assert!(!self.id.is_go(), "GO can never be owned");
        self.owner = Some(owner);
    }

    pub(crate) fn clear_owner(&mut self) {
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_five_times_rent() {
        let space = Space::new(SpaceId::new(3), 75);
        assert_eq!(space.price(), 375);
    }

    #[test]
    fn test_display_names_go() {
        assert_eq!(SpaceId::GO.to_string(), "GO");
        assert_eq!(SpaceId::new(12).to_string(), "Space 12");
    }
}
