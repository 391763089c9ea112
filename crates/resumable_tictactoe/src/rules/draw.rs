//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Marker;

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_single_gap_not_full() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_any_distribution() {
        let board = Board::from_rows([[O, O, O], [O, O, O], [O, O, O]]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(!check_winner(&board, Marker::X));
        assert!(!check_winner(&board, Marker::O));
    }
}
