//! Turnwise - round-robin turn sequencing for board games
//!
//! This library separates turn-taking from game rules.
//!
//! # Architecture
//!
//! - **Sequencer**: [`TurnOrder`] cycles the active player, [`TurnGame`] is the
//!   capability set every game implements
//! - **Config**: [`TurnConfig`] construction parameters, loadable from TOML
//! - **Games**: concrete games (currently tic-tac-toe)
//!
//! # Example
//!
//! ```
//! use turnwise::{Move, TicTacToe, TurnGame};
//!
//! let mut game = TicTacToe::new();
//! game.turn(Move::new(1, 1)).expect("center is free");
//! assert_eq!(game.player_turn(), 2);
//!
//! // Occupied squares are rejected and the turn stays with player 2.
//! assert!(game.turn(Move::new(1, 1)).is_err());
//! assert_eq!(game.player_turn(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod sequencer;
mod tictactoe;

// Crate-level exports - Configuration
pub use config::TurnConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, TurnError};

// Crate-level exports - Turn sequencing
pub use sequencer::{PlayerId, TurnGame, TurnOrder};

// Crate-level exports - Game types (tic-tac-toe)
pub use tictactoe::{
    Board, IllegalMove, Line, Mark, Move, Placement, Square, TicTacToe, BOARD_SIZE,
};
