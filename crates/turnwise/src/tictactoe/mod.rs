mod action;
mod game;
mod rules;
mod types;

pub use action::{IllegalMove, Move, Placement};
pub use game::TicTacToe;
pub use types::{Board, Line, Mark, Square, BOARD_SIZE};
