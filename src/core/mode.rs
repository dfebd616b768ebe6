//! Play modes.
//!
//! A session is either bounded by a countdown (`Timed`) or runs until the
//! active category's questions are exhausted (`Endless`). The engine itself
//! is mode-agnostic except for session bookkeeping; only hosts start timers.

use serde::{Deserialize, Serialize};

/// How a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Bounded by the countdown; ends on expiry or question exhaustion,
    /// whichever comes first.
    #[default]
    Timed,
    /// No time limit; ends only when questions run out.
    Endless,
}

impl GameMode {
    /// Whether this mode runs under the countdown timer.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, GameMode::Timed)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Timed => write!(f, "Timed"),
            GameMode::Endless => write!(f, "Endless"),
        }
    }
}
