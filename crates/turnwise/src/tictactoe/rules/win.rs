//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Mark, Square, BOARD_SIZE};
use tracing::{instrument, trace};

/// Lines in the order they are checked.
///
/// Row `i` and column `i` are checked together for each index, then the
/// main diagonal, then the anti-diagonal.
pub fn scan_order() -> impl Iterator<Item = Line> {
    (0..BOARD_SIZE)
        .flat_map(|i| [Line::Row(i), Line::Column(i)])
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

/// Returns the first line holding three identical marks, in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    scan_order().find_map(|line| {
        let [a, b, c] = line.cells().map(|(row, col)| board.get(row, col));
        match (a, b, c) {
            (Some(Square::Occupied(mark)), Some(sb), Some(sc))
                if sb == Square::Occupied(mark) && sc == Square::Occupied(mark) =>
            {
                trace!(%line, %mark, "Found winning line");
                Some((line, mark))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Mark::X);
    const O: Square = Square::Occupied(Mark::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_scan_order() {
        let order: Vec<_> = scan_order().collect();
        assert_eq!(
            order,
            vec![
                Line::Row(0),
                Line::Column(0),
                Line::Row(1),
                Line::Column(1),
                Line::Row(2),
                Line::Column(2),
                Line::MainDiagonal,
                Line::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Mark::X)));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        assert_eq!(winning_line(&board), Some((Line::Column(1), Mark::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows([[X, E, O], [X, O, E], [O, E, X]]);
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Mark::O)));
    }

    #[test]
    fn test_column_zero_found_before_row_one() {
        let board = Board::from_rows([[O, X, X], [O, O, O], [O, X, X]]);
        assert_eq!(winning_line(&board), Some((Line::Column(0), Mark::O)));
    }

    #[test]
    fn test_row_before_diagonal() {
        let board = Board::from_rows([[X, E, E], [O, X, E], [O, O, X]]);
        assert_eq!(winning_line(&board), Some((Line::MainDiagonal, Mark::X)));

        let board = Board::from_rows([[X, E, E], [O, X, E], [X, X, X]]);
        assert_eq!(winning_line(&board), Some((Line::Row(2), Mark::X)));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_rows([[X, X, O], [O, O, X], [X, O, X]]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[X, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(winning_line(&board), None);
    }
}
