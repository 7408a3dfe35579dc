//! The game engine: one board, one player registry, synchronous turns.
//!
//! A single external driver calls these operations one at a time; the
//! engine mutates its own state in place and returns the result. There is
//! no internal concurrency - a multi-session host would hold one
//! `GameEngine` per session.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Space, SpaceId};
use crate::core::error::{GameError, GameResult};
use crate::core::player::{Player, PlayerId, PlayerRegistry};

/// What a completed `move_player` call settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The player is eliminated; nothing moved, nothing changed.
    Skipped,
    /// Landed on GO, an unowned space, or the player's own property.
    /// No rent due.
    Landed(SpaceId),
    /// Landed on another player's space and covered the rent in full.
    RentPaid {
        landed: SpaceId,
        owner: PlayerId,
        amount: i64,
    },
    /// Landed on another player's space and could not cover the rent:
    /// the mover surrendered their whole balance to the owner, forfeited
    /// every property, and is out of the game.
    Eliminated {
        landed: SpaceId,
        owner: PlayerId,
        surrendered: i64,
    },
}

/// Orchestrates one game: owns the board and the player registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameEngine {
    board: Option<Board>,
    players: PlayerRegistry,
}

impl GameEngine {
    /// Create an engine with no board and no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot board setup: GO with the given bonus, then one space per
    /// rent value. A second call fails with `BoardAlreadyBuilt`.
    pub fn create_spaces(&mut self, go_bonus: i64, rents: &[i64]) -> GameResult<()> {
        if self.board.is_some() {
            return Err(GameError::BoardAlreadyBuilt);
        }
        self.board = Some(Board::new(go_bonus, rents)?);
        Ok(())
    }

    /// Register a new player at GO with the given starting balance.
    pub fn create_player(&mut self, name: &str, balance: i64) -> GameResult<PlayerId> {
        self.players.create(name, balance)
    }

    /// Move a player forward and resolve the space they land on.
    ///
    /// Eliminated players never move (`MoveOutcome::Skipped`). Movement
    /// wraps around the track; crossing or landing on GO credits the bonus
    /// before any rent falls due. Rent is owed only on a space owned by
    /// another player, and only a balance strictly greater than the rent
    /// survives settlement - a player whose balance exactly equals the rent
    /// cannot afford it and is eliminated.
    ///
    /// Game rules roll 1-6 per turn; the engine resolves any positive step
    /// count the driver supplies.
    pub fn move_player(&mut self, name: &str, steps: u8) -> GameResult<MoveOutcome> {
        let mover = self.players.id_of(name)?;
        let track_length = self.board()?.track_length();
        let go_bonus = self.board()?.go_bonus();

        if self.players.player(mover).is_eliminated() {
            debug!("{name} is out of the game, move skipped");
            return Ok(MoveOutcome::Skipped);
        }

        let raw = self.players.player(mover).location().index() + steps as usize;
        let landed = SpaceId::new((raw % track_length) as u16);
        // Bonus whenever the raw sum runs past the last space index, i.e.
        // the path crosses or lands on GO going forward.
        let passed_go = raw > track_length - 1;

        {
            let player = self.players.player_mut(mover);
            player.set_location(landed);
            if passed_go {
                player.credit(go_bonus);
                debug!("{name} passes GO, collects {go_bonus}");
            }
        }

        let space = self.board()?.space(landed)?;
        let owner = match space.owner() {
            Some(owner) if owner != mover => owner,
            _ => return Ok(MoveOutcome::Landed(landed)),
        };
        let rent = space.rent();
        let balance = self.players.player(mover).balance();

        if balance > rent {
            self.players.player_mut(mover).debit(rent);
            self.players.player_mut(owner).credit(rent);
            debug!("{name} pays {rent} rent to {owner} at {landed}");
            return Ok(MoveOutcome::RentPaid { landed, owner, amount: rent });
        }

        // Unpayable rent: the owner collects only what the mover had, the
        // mover is zeroed, and their holdings return to the unowned pool.
        self.players.player_mut(mover).debit(balance);
        self.players.player_mut(owner).credit(balance);
        let released = self.players.player_mut(mover).take_properties();
        let board = self.board_mut()?;
        for id in &released {
            board.space_mut(*id)?.clear_owner();
        }
        info!(
            "{name} cannot cover {rent} rent at {landed}: surrenders {balance}, \
             releases {} properties, eliminated",
            released.len()
        );
        Ok(MoveOutcome::Eliminated { landed, owner, surrendered: balance })
    }

    /// Buy the space the player is standing on.
    ///
    /// Returns `Ok(false)` without any state change when the space is GO
    /// (never purchasable - a no-op rather than an error), already owned,
    /// or the player's balance is not strictly greater than the price.
    pub fn buy_space(&mut self, name: &str) -> GameResult<bool> {
        let buyer = self.players.id_of(name)?;
        let location = self.players.player(buyer).location();
        if location.is_go() {
            return Ok(false);
        }

        let space = self.board()?.space(location)?;
        if space.owner().is_some() {
            return Ok(false);
        }
        let price = space.price();
        if self.players.player(buyer).balance() <= price {
            return Ok(false);
        }

        self.players.player_mut(buyer).debit(price);
        self.players.player_mut(buyer).add_property(location);
        self.board_mut()?.space_mut(location)?.set_owner(buyer);
        info!("{name} buys {location} for {price}");
        Ok(true)
    }

    /// Names of solvent players once at most one remains.
    ///
    /// Returns an empty list while two or more players still have money
    /// (the game is not over), a singleton list when exactly one does (the
    /// winner), and an empty list in the degenerate all-broke tie. Pure
    /// query: repeated calls without intervening moves return the same
    /// answer.
    #[must_use]
    pub fn check_game_over(&self) -> Vec<String> {
        let solvent: Vec<&Player> = self
            .players
            .iter()
            .map(|(_, p)| p)
            .filter(|p| p.balance() > 0)
            .collect();

        if solvent.len() > 1 {
            return Vec::new();
        }
        solvent.iter().map(|p| p.name().to_string()).collect()
    }

    /// A player's current balance.
    pub fn balance(&self, name: &str) -> GameResult<i64> {
        Ok(self.players.by_name(name)?.balance())
    }

    /// A player's current position on the track.
    pub fn location(&self, name: &str) -> GameResult<SpaceId> {
        Ok(self.players.by_name(name)?.location())
    }

    /// Look up a space by number.
    pub fn space(&self, id: SpaceId) -> GameResult<&Space> {
        self.board()?.space(id)
    }

    /// Iterate over players in creation order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    fn board(&self) -> GameResult<&Board> {
        self.board.as_ref().ok_or(GameError::BoardNotBuilt)
    }

    fn board_mut(&mut self) -> GameResult<&mut Board> {
        self.board.as_mut().ok_or(GameError::BoardNotBuilt)
    }
}
