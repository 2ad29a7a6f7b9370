//! Core domain types for tic-tac-toe.

use super::rules;
use crate::sequencer::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player 1's mark.
    X,
    /// Player 2's mark.
    O,
}

impl Mark {
    /// Returns the mark used by a player: odd players play X, even players O.
    pub fn for_player(player: PlayerId) -> Self {
        if player % 2 == 1 { Mark::X } else { Mark::O }
    }

    /// Returns the player owning this mark.
    pub fn player(self) -> PlayerId {
        match self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Character drawn for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }

    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 tic-tac-toe board, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(squares: [[Square; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at `(row, col)`, or `None` if off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row)?.get(col).copied()
    }

    /// Checks if `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Iterates over the coordinates of empty squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, square)| **square == Square::Empty)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| square.mark() == Some(mark))
            .count()
    }

    /// Checks if every square is occupied.
    ///
    /// A full board is not treated as a finished game.
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Returns the first winning line and its mark, in scan order.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        rules::winning_line(self)
    }

    /// Writes a mark. Callers must have checked the square is empty.
    pub(super) fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.squares[row][col] = Square::Occupied(mark);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, [a, b, c]) in self.rows().iter().enumerate() {
            if row > 0 {
                f.write_str("\n-----------\n")?;
            }
            write!(f, " {} | {} | {} ", a, b, c)?;
        }
        Ok(())
    }
}

/// A line of three squares that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `0..3`, top to bottom.
    Row(usize),
    /// Column `0..3`, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Coordinates of the three squares in this line.
    pub fn cells(self) -> [(usize, usize); BOARD_SIZE] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}
