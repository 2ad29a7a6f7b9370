//! Turn-taking tic-tac-toe game.

use super::action::{IllegalMove, Move, Placement};
use super::types::{Board, Line, Mark, Square};
use crate::error::TurnError;
use crate::sequencer::{PlayerId, TurnGame, TurnOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Number of players in tic-tac-toe.
const PLAYERS: usize = 2;

/// Tic-tac-toe on a 3x3 board for two players.
///
/// Player 1 plays [`Mark::X`] and moves first; player 2 plays [`Mark::O`].
/// The game records a winner as soon as a line is completed but keeps
/// accepting moves on empty squares. Stopping is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TicTacToeSnapshot")]
pub struct TicTacToe {
    board: Board,
    turn_order: TurnOrder,
    winner: Option<PlayerId>,
    winning_line: Option<Line>,
    history: Vec<Placement>,
}

/// Unvalidated wire form of [`TicTacToe`].
#[derive(Deserialize)]
struct TicTacToeSnapshot {
    board: Board,
    turn_order: TurnOrder,
    winner: Option<PlayerId>,
    winning_line: Option<Line>,
    history: Vec<Placement>,
}

impl TryFrom<TicTacToeSnapshot> for TicTacToe {
    type Error = TurnError;

    fn try_from(snapshot: TicTacToeSnapshot) -> Result<Self, Self::Error> {
        let players = *snapshot.turn_order.players();
        if players != PLAYERS {
            return Err(TurnError::WrongPlayerCount {
                players,
                expected: PLAYERS,
            });
        }
        Ok(Self {
            board: snapshot.board,
            turn_order: snapshot.turn_order,
            winner: snapshot.winner,
            winning_line: snapshot.winning_line,
            history: snapshot.history,
        })
    }
}

impl TicTacToe {
    /// Creates a new game with an empty board and player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn_order: TurnOrder {
                players: PLAYERS,
                current: 1,
            },
            winner: None,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winner, once one has been recorded.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Returns the line that won the game, once one has been recorded.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Mark of the player whose turn it is.
    pub fn current_mark(&self) -> Mark {
        Mark::for_player(self.player_turn())
    }

    /// Iterates over every move that would currently be accepted.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board
            .empty_cells()
            .map(|(row, col)| Move::new(row, col))
    }

    /// Checks a move against the board without applying it.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::OutOfBounds`] if either coordinate is outside `0..3`
    /// - [`IllegalMove::Occupied`] if the square already holds a mark
    #[instrument(skip(self))]
    pub fn acceptable_move(&self, mv: &Move) -> Result<(), IllegalMove> {
        match self.board.get(mv.row, mv.col) {
            None => Err(IllegalMove::OutOfBounds {
                row: mv.row,
                col: mv.col,
            }),
            Some(Square::Occupied(mark)) => Err(IllegalMove::Occupied {
                row: mv.row,
                col: mv.col,
                mark,
            }),
            Some(Square::Empty) => Ok(()),
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnGame for TicTacToe {
    type Move = Move;
    type Rejection = IllegalMove;

    fn turn_order(&self) -> &TurnOrder {
        &self.turn_order
    }

    fn turn_order_mut(&mut self) -> &mut TurnOrder {
        &mut self.turn_order
    }

    #[instrument(skip(self), fields(player = self.player_turn()))]
    fn update_state(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        if let Err(reason) = self.acceptable_move(mv) {
            warn!(%reason, "Invalid move, try again");
            return Err(reason);
        }

        let player = self.player_turn();
        let mark = Mark::for_player(player);
        self.board.place(mv.row, mv.col, mark);
        self.history.push(Placement::new(player, mark, *mv));
        debug!(%mark, "Placed mark");

        self.check_win();
        Ok(())
    }

    #[instrument(skip(self))]
    fn check_win(&mut self) -> bool {
        let Some((line, mark)) = self.board.winning_line() else {
            return false;
        };

        if self.winner.is_none() {
            info!(%line, %mark, player = mark.player(), "Game won");
            self.winner = Some(mark.player());
            self.winning_line = Some(line);
        }
        true
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToe, moves: &[(usize, usize)]) {
        for &mv in moves {
            game.turn(mv.into()).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToe::new();
        assert_eq!(game.player_turn(), 1);
        assert_eq!(game.players(), 2);
        assert_eq!(game.winner(), None);
        assert_eq!(game.current_mark(), Mark::X);
        assert_eq!(game.legal_moves().count(), 9);
    }

    #[test]
    fn test_update_state_does_not_advance_turn() {
        let mut game = TicTacToe::new();
        game.update_state(&Move::new(0, 0)).unwrap();
        assert_eq!(game.player_turn(), 1);
        assert_eq!(game.board().get(0, 0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(1, 1)]);
        let before = game.clone();

        assert_eq!(
            game.turn(Move::new(1, 1)),
            Err(IllegalMove::Occupied {
                row: 1,
                col: 1,
                mark: Mark::X
            })
        );
        assert_eq!(
            game.turn(Move::new(0, 3)),
            Err(IllegalMove::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_check_win_on_unwon_board() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (0, 1)]);
        assert!(!game.check_win());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_winner_recorded_by_move() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 2), (0, 0), (1, 2), (1, 1), (2, 2)]);
        assert_eq!(game.winner(), Some(1));
        assert_eq!(game.winning_line(), Some(Line::Column(2)));
        assert!(game.check_win());
    }

    #[test]
    fn test_player_two_can_win() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 2), (0, 2)]);
        assert_eq!(game.winner(), Some(2));
        assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_set_player_changes_mark() {
        let mut game = TicTacToe::new();
        game.set_player(2).unwrap();
        play(&mut game, &[(0, 0)]);
        assert_eq!(game.board().get(0, 0), Some(Square::Occupied(Mark::O)));
        assert_eq!(game.player_turn(), 1);
        assert_eq!(game.history()[0].player, 2);
    }
}
