//! History store abstraction and the in-memory implementation.
//!
//! The engine never touches global state: hosts hand it a `HistoryStore`
//! and the facade appends one entry per finished timed session. Tests use
//! [`InMemoryHistory`]; real hosts usually want
//! [`crate::history::JsonFileHistory`].

use thiserror::Error;

use super::entry::HistoryEntry;

/// A history store failure.
///
/// Store failures are non-fatal to a session: the facade logs a warning
/// and play continues; only the record is lost.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Reading or writing the backing storage failed.
    #[error("failed to access history store: {0}")]
    Io(#[from] std::io::Error),

    /// The backing storage held data that did not parse.
    #[error("failed to parse history store: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An ordered, append-only log of finished sessions.
///
/// Append order is chronological order; entries are never updated or
/// deleted.
pub trait HistoryStore {
    /// All entries, oldest first.
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Add one entry to the end of the log.
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;
}

/// History kept in memory only. Gone when dropped; made for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistory {
    /// Create an empty in-memory history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct view of the entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl HistoryStore for InMemoryHistory {
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        Ok(())
    }
}
