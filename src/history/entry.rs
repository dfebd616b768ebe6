//! History entries - one finished session each.

use serde::{Deserialize, Serialize};

/// Outcome of one finished timed session: final score and seconds spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Final score when the session ended.
    pub score: u32,

    /// Seconds elapsed between start and end.
    pub seconds: u32,
}

impl HistoryEntry {
    /// Create a new entry.
    #[must_use]
    pub const fn new(score: u32, seconds: u32) -> Self {
        Self { score, seconds }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {}, Time: {}s", self.score, self.seconds)
    }
}
