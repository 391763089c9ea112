//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker, Position};
use tracing::instrument;

/// The 8 lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `marker` holds all three cells of any line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, marker: Marker) -> bool {
    let target = Cell::Marked(marker);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == target))
}
