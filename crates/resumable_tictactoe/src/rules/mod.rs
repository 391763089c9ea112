//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from
//! board storage so the game state and tests can share them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;
