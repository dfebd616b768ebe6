//! File-backed history store.
//!
//! A single JSON document holding a `"scoreHistory"` array:
//!
//! ```json
//! { "scoreHistory": [ { "score": 80, "seconds": 25 } ] }
//! ```
//!
//! The document is read once at open and rewritten in full on every
//! append. History files are tiny (one small object per finished game),
//! so rewrite cost is irrelevant.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::entry::HistoryEntry;
use super::store::{HistoryError, HistoryStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(rename = "scoreHistory")]
    score_history: Vec<HistoryEntry>,
}

/// History persisted to a JSON file.
///
/// ## Example
///
/// ```no_run
/// use emoji_quiz::{HistoryEntry, HistoryStore, JsonFileHistory};
///
/// let mut history = JsonFileHistory::open("scores.json")?;
/// history.append(HistoryEntry::new(80, 25))?;
/// # Ok::<(), emoji_quiz::HistoryError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    document: HistoryDocument,
}

impl JsonFileHistory {
    /// Open a history file, creating an empty log if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails if an existing file cannot be read or does not parse.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        let document = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HistoryDocument::default()
        };
        log::debug!(
            "opened history at {} ({} entries)",
            path.display(),
            document.score_history.len()
        );
        Ok(Self { path, document })
    }

    /// Where this history is stored.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.document.score_history.clone())
    }

    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.document.score_history.push(entry);
        self.persist()
    }
}
