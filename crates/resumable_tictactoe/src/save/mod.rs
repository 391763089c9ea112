//! Single-slot save and resume for an in-progress game.

mod error;
mod record;
mod slot;

pub use error::PersistenceError;
pub use record::GameRecord;
pub use slot::{DEFAULT_SAVE_FILE, SaveSlot};
