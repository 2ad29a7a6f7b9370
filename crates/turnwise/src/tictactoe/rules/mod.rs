//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from the
//! turn-taking game so they can be evaluated on any position.

pub mod win;

pub use win::winning_line;
