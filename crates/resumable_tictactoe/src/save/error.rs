//! Persistence error types.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure to snapshot or restore the save slot.
///
/// A missing record is not an error; [`SaveSlot::load`](super::SaveSlot::load)
/// reports it as `Ok(None)`.
#[derive(Debug, Display, Error)]
pub enum PersistenceError {
    /// The record exists but does not match the expected layout.
    #[display("Corrupt save record at line {}: {}", line, reason)]
    CorruptRecord {
        /// 1-based line where validation failed.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The underlying storage could not be written, read or removed.
    #[display("Save storage failure at {}: {}", path.display(), source)]
    IoFailure {
        /// Location of the slot.
        path: PathBuf,
        /// The I/O error reported by the OS.
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Creates a corrupt-record error for a line.
    pub(crate) fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Returns true if the record failed validation (as opposed to an I/O failure).
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }
}
