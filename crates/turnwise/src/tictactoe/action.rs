//! Move input and move outcomes for tic-tac-toe.

use super::Mark;
use crate::sequencer::PlayerId;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` square the current player wants to mark.
///
/// Moves carry no player. The game stamps them with whoever holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("({}, {})", row, col)]
pub struct Move {
    /// Row, counting from 0 at the top.
    pub row: usize,
    /// Column, counting from 0 at the left.
    pub col: usize,
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<[usize; 2]> for Move {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

/// An accepted move, as recorded in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// Player who made the move.
    pub player: PlayerId,
    /// Mark written to the board.
    pub mark: Mark,
    /// Square that was marked.
    pub mv: Move,
}

/// Reason a move was rejected.
///
/// Illegal moves are an expected outcome: the board is left untouched and the
/// same player keeps the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The coordinates are off the board.
    #[display("Square ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square ({}, {}) is already occupied by {}", row, col, mark)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Mark already in the square.
        mark: Mark,
    },
}
