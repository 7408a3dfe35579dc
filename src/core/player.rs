//! Players and the insertion-ordered player registry.
//!
//! ## PlayerId
//!
//! Stable index into the [`PlayerRegistry`]. Space ownership is recorded as
//! `Option<PlayerId>`, so ownership checks compare typed ids rather than
//! name strings.
//!
//! ## PlayerRegistry
//!
//! Insertion-ordered collection keyed by name. Grows only via `create`,
//! never shrinks: an eliminated player stays registered with a balance of
//! zero.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::SpaceId;
use crate::core::error::{GameError, GameResult};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player created is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw registry index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in the game.
///
/// A balance of zero means the player has been eliminated: they no longer
/// move, can never afford a purchase, and hold no properties. Elimination
/// is permanent - balances are only zeroed by an unpayable rent, and a
/// zero-balance player is skipped before any credit could reach them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    location: SpaceId,
    balance: i64,
    /// Convenience index of owned spaces; `Space::owner` is the record of
    /// truth and the two are kept in lockstep by the engine.
    properties: BTreeSet<SpaceId>,
}

impl Player {
    pub(crate) fn new(name: String, balance: i64) -> Self {
        Self {
            name,
            location: SpaceId::GO,
            balance,
            properties: BTreeSet::new(),
        }
    }

    /// The player's name (immutable after creation).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current position on the track.
    #[must_use]
    pub fn location(&self) -> SpaceId {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: SpaceId) {
        self.location = location;
    }

    /// Current account balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: i64) {
        self.balance -= amount;
    }

    /// Whether this player is out of the game.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.balance == 0
    }

    /// Spaces this player currently owns, in track order.
    pub fn properties(&self) -> impl Iterator<Item = SpaceId> + '_ {
        self.properties.iter().copied()
    }

    /// Whether this player owns the given space.
    #[must_use]
    pub fn owns(&self, space: SpaceId) -> bool {
        self.properties.contains(&space)
    }

    pub(crate) fn add_property(&mut self, space: SpaceId) {
        self.properties.insert(space);
    }

    /// Forfeit every owned space, returning the set for the board to
    /// release. Collect-then-release keeps the forfeiture in two phases.
    pub(crate) fn take_properties(&mut self) -> BTreeSet<SpaceId> {
        std::mem::take(&mut self.properties)
    }
}

/// Insertion-ordered player collection keyed by name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player at GO with the given starting balance.
    ///
    /// Duplicate names are rejected: the registry is keyed by name, and two
    /// players sharing one would make every later lookup ambiguous.
    pub fn create(&mut self, name: &str, balance: i64) -> GameResult<PlayerId> {
        if self.by_name.contains_key(name) {
            return Err(GameError::DuplicatePlayer { name: name.to_string() });
        }
        assert!(self.players.len() < 255, "At most 255 players supported");

        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Player::new(name.to_string(), balance));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a player's id by name.
    pub fn id_of(&self, name: &str) -> GameResult<PlayerId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GameError::PlayerNotFound { name: name.to_string() })
    }

    /// Look up a player by name.
    pub fn by_name(&self, name: &str) -> GameResult<&Player> {
        Ok(self.player(self.id_of(name)?))
    }

    /// Get a player by id.
    ///
    /// Ids are only minted by `create`, so indexing cannot fail.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Iterate over players in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId::new(i as u8), p))
    }

    /// Number of registered players, eliminated ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_insertion_order_ids() {
        let mut registry = PlayerRegistry::new();
        let a = registry.create("Ada", 300).unwrap();
        let b = registry.create("Bela", 300).unwrap();

        assert_eq!(a, PlayerId::new(0));
        assert_eq!(b, PlayerId::new(1));
        assert_eq!(registry.player(a).name(), "Ada");
        assert_eq!(registry.player(b).location(), SpaceId::GO);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = PlayerRegistry::new();
        registry.create("Ada", 300).unwrap();

        let err = registry.create("Ada", 500).unwrap_err();
        assert!(matches!(err, GameError::DuplicatePlayer { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_miss_is_explicit() {
        let registry = PlayerRegistry::new();
        assert!(matches!(
            registry.id_of("nobody"),
            Err(GameError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_take_properties_empties_the_set() {
        let mut player = Player::new("Ada".to_string(), 300);
        player.add_property(SpaceId::new(3));
        player.add_property(SpaceId::new(7));

        let released = player.take_properties();
        assert_eq!(released.len(), 2);
        assert_eq!(player.properties().count(), 0);
    }
}
