//! Round-robin turn sequencing shared by every game.
//!
//! [`TurnOrder`] owns the active-player index. [`TurnGame`] is the capability
//! set a concrete game provides: it applies moves and detects wins, while the
//! provided `turn` method advances the sequencer only after a legal move.

use crate::config::TurnConfig;
use crate::error::TurnError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player identifier, counting from 1.
pub type PlayerId = usize;

/// Active-player index cycling over `1..=players`.
///
/// Deserialized values go through the same checks as [`TurnOrder::new`] and
/// [`TurnOrder::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "TurnOrderSnapshot")]
pub struct TurnOrder {
    /// Number of players in the rotation.
    pub(crate) players: usize,
    /// Player whose turn it is.
    pub(crate) current: PlayerId,
}

/// Unvalidated wire form of [`TurnOrder`].
#[derive(Deserialize)]
struct TurnOrderSnapshot {
    players: usize,
    current: PlayerId,
}

impl TryFrom<TurnOrderSnapshot> for TurnOrder {
    type Error = TurnError;

    fn try_from(snapshot: TurnOrderSnapshot) -> Result<Self, Self::Error> {
        let mut order = Self::new(snapshot.players)?;
        order.set(snapshot.current)?;
        Ok(order)
    }
}

impl TurnOrder {
    /// Creates a rotation of `players` players, with player 1 to move.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoPlayers`] if `players` is zero.
    #[instrument]
    pub fn new(players: usize) -> Result<Self, TurnError> {
        if players == 0 {
            return Err(TurnError::NoPlayers);
        }
        Ok(Self {
            players,
            current: 1,
        })
    }

    /// Creates a rotation from configuration.
    #[instrument]
    pub fn from_config(config: &TurnConfig) -> Result<Self, TurnError> {
        let mut order = Self::new(*config.players())?;
        order.set(*config.first_player())?;
        Ok(order)
    }

    /// Hands the turn to the next player, wrapping after the last one.
    #[instrument(skip(self), fields(from = self.current))]
    pub fn advance(&mut self) {
        self.current = self.current % self.players + 1;
        debug!(to = self.current, "Advanced turn");
    }

    /// Overrides whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::PlayerOutOfRange`] if `player` is not in
    /// `1..=players`. The turn is left unchanged.
    #[instrument(skip(self), fields(players = self.players))]
    pub fn set(&mut self, player: PlayerId) -> Result<(), TurnError> {
        if player == 0 || player > self.players {
            warn!(player, "Rejected player override");
            return Err(TurnError::PlayerOutOfRange {
                player,
                players: self.players,
            });
        }
        self.current = player;
        Ok(())
    }
}

/// Capabilities of a turn-based game.
///
/// Implementors supply move application and win detection. Turn-taking
/// comes for free: [`turn`](TurnGame::turn) advances the sequencer if and
/// only if the move was applied. The sequencer never ends a game on its
/// own; a finished game is simply no longer played.
pub trait TurnGame {
    /// Move input accepted by the game.
    type Move: std::fmt::Debug;

    /// Reason a move was not applied.
    type Rejection: std::error::Error;

    /// Returns the game's turn sequencer.
    fn turn_order(&self) -> &TurnOrder;

    /// Returns the game's turn sequencer mutably.
    fn turn_order_mut(&mut self) -> &mut TurnOrder;

    /// Applies a move for the current player.
    ///
    /// Returns `Ok(())` if the move was legal and applied. A rejected move
    /// must leave the game state untouched.
    fn update_state(&mut self, mv: &Self::Move) -> Result<(), Self::Rejection>;

    /// Returns whether the game has been won, recording the winner if so.
    fn check_win(&mut self) -> bool;

    /// Takes a turn: applies the move, then passes the turn on if it was legal.
    ///
    /// # Errors
    ///
    /// Returns the game's rejection if the move was illegal. The same player
    /// keeps the turn and must retry.
    #[instrument(skip(self), fields(player = self.player_turn()))]
    fn turn(&mut self, mv: Self::Move) -> Result<(), Self::Rejection> {
        self.update_state(&mv)?;
        self.turn_order_mut().advance();
        Ok(())
    }

    /// Overrides whose turn it is, for embedding in a larger turn system.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::PlayerOutOfRange`] if `player` is not in
    /// `1..=players`.
    fn set_player(&mut self, player: PlayerId) -> Result<(), TurnError> {
        self.turn_order_mut().set(player)
    }

    /// Returns the player whose turn it is.
    fn player_turn(&self) -> PlayerId {
        *self.turn_order().current()
    }

    /// Returns the number of players.
    fn players(&self) -> usize {
        *self.turn_order().players()
    }
}
