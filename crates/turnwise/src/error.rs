//! Error types for turn sequencing and configuration.

use crate::sequencer::PlayerId;
use derive_more::{Display, Error};
use tracing::instrument;

/// Contract violation on the turn sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TurnError {
    /// The requested player is not one of `1..=players`.
    #[display("Player {} is out of range (expected 1..={})", player, players)]
    PlayerOutOfRange {
        /// Player that was requested.
        player: PlayerId,
        /// Number of players in the game.
        players: usize,
    },

    /// A game needs at least one player.
    #[display("A game needs at least one player")]
    NoPlayers,

    /// The game is played by a fixed number of players.
    #[display("Expected {} players, found {}", expected, players)]
    WrongPlayerCount {
        /// Number of players found.
        players: usize,
        /// Number of players the game is played by.
        expected: usize,
    },
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<TurnError> for ConfigError {
    #[track_caller]
    fn from(err: TurnError) -> Self {
        Self::new(format!("Invalid turn order: {}", err))
    }
}
