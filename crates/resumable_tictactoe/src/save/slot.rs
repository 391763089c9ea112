//! File-backed single save slot.

use super::{GameRecord, PersistenceError};
use crate::GameState;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// File name used when no other location is configured.
pub const DEFAULT_SAVE_FILE: &str = "game_state.txt";

/// The one place an in-progress game is saved.
///
/// The slot is either absent or holds exactly one record. Saving overwrites,
/// loading consumes, and deleting is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    /// Creates a slot stored at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a record is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes `state` to the slot, replacing any earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::IoFailure`] if the record cannot be written.
    #[instrument(skip(self, state), fields(path = %self.path.display(), player = state.current_player()))]
    pub fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        let text = GameRecord::from_state(state).encode();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_failure(e))?;
        }
        fs::write(&self.path, text).map_err(|e| self.io_failure(e))?;

        info!("Game saved");
        Ok(())
    }

    /// Reads and consumes the record.
    ///
    /// Returns `Ok(None)` when the slot is empty. Once a record has been read
    /// it is removed, whether or not it was valid, so a finished load always
    /// leaves the slot empty.
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::CorruptRecord`] if the record fails validation
    /// - [`PersistenceError::IoFailure`] if it exists but cannot be read or removed
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<GameState>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved game");
                return Ok(None);
            }
            Err(e) => return Err(self.io_failure(e)),
        };

        let decoded = String::from_utf8(bytes)
            .map_err(|e| {
                let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
                let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
                PersistenceError::corrupt(line, "record is not valid UTF-8")
            })
            .and_then(|text| GameRecord::decode(&text));
        self.delete()?;

        match decoded {
            Ok(record) => {
                info!(player = record.player(), marker = %record.marker(), "Game loaded");
                Ok(Some(record.into_state()))
            }
            Err(e) => {
                warn!(error = %e, "Discarded corrupt save record");
                Err(e)
            }
        }
    }

    /// Removes the record if present.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::IoFailure`] if an existing record cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn delete(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Save record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_failure(e)),
        }
    }

    fn io_failure(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::IoFailure {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for SaveSlot {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}
