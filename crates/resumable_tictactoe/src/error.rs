//! Move validation errors.

use crate::position::Position;

/// A rejected move. The game state is unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The move number is not 1-9.
    #[display("Move {} is out of range (choose 1-9)", _0)]
    OutOfRange(#[error(not(source))] u8),

    /// The target cell already holds a marker.
    #[display("{} is already taken", _0)]
    CellOccupied(#[error(not(source))] Position),
}
