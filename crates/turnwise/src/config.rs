//! Construction parameters for the turn sequencer.

use crate::error::ConfigError;
use crate::sequencer::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How many players take turns, and who starts.
///
/// ```toml
/// players = 2
/// first_player = 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Number of players cycling through turns.
    #[serde(default = "default_players")]
    players: usize,

    /// Player who moves first (counting from 1).
    #[serde(default = "default_first_player")]
    first_player: PlayerId,
}

#[instrument]
fn default_players() -> usize {
    2
}

#[instrument]
fn default_first_player() -> PlayerId {
    1
}

impl TurnConfig {
    /// Creates a new configuration.
    ///
    /// Values are validated when a [`TurnOrder`](crate::TurnOrder) is built
    /// from the configuration.
    #[instrument]
    pub fn new(players: usize, first_player: PlayerId) -> Self {
        Self {
            players,
            first_player,
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(
            players = config.players,
            first_player = config.first_player,
            "Parsed turn config"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(players = config.players, "Config loaded successfully");
        Ok(config)
    }
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self::new(default_players(), default_first_player())
    }
}
