//! Resumable tic-tac-toe - game state, rules, and a single save slot.
//!
//! # Architecture
//!
//! - **GameState**: the authoritative 3x3 board and whose turn it is
//! - **Rules**: pure win/draw queries over a [`Board`]
//! - **SaveSlot**: snapshots one in-progress game to a text record and
//!   restores it later
//!
//! # Example
//!
//! ```no_run
//! use resumable_tictactoe::{GameState, Marker, SaveSlot};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let slot = SaveSlot::new("game_state.txt");
//! let mut game = slot.load()?.unwrap_or_default();
//!
//! game.apply_move(5)?;
//! if game.check_winner(Marker::X) || game.is_draw() {
//!     slot.delete()?;
//! } else {
//!     slot.save(&game)?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod position;
mod rules;
mod save;
mod types;

// Crate-level exports - Game types
pub use error::MoveError;
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Marker};

// Crate-level exports - Rules
pub use rules::{check_winner, is_full};

// Crate-level exports - Persistence
pub use save::{DEFAULT_SAVE_FILE, GameRecord, PersistenceError, SaveSlot};
