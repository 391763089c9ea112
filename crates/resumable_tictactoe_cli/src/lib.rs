//! Console front end for resumable tic-tac-toe.
//!
//! Reads moves from a prompt, drives a [`GameState`](resumable_tictactoe::GameState),
//! and saves or resumes the game through a [`SaveSlot`](resumable_tictactoe::SaveSlot).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod render;
mod session;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Interaction loop
pub use render::Renderer;
pub use session::{Session, SessionOutcome};
