//! Round state - everything needed to present and resolve one question.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{CategoryId, Symbol};

/// One presented question: a hint, a shuffled candidate set, and the
/// correct symbol.
///
/// Rounds are minted by [`crate::round::RoundEngine::load_question`] and
/// replaced wholesale when the next question loads. The candidate set
/// always holds distinct symbols with the answer among them exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Category this round was drawn from.
    pub category: CategoryId,

    /// Question index this round was built for (0-based).
    pub question_index: usize,

    /// Hint text to show the player.
    pub hint: String,

    /// Candidate symbols in display order.
    candidates: SmallVec<[Symbol; 4]>,

    /// The correct symbol.
    answer: Symbol,
}

impl Round {
    /// Create a round.
    ///
    /// # Panics
    ///
    /// Panics if the candidates are not distinct or the answer is not
    /// among them exactly once.
    #[must_use]
    pub fn new(
        category: CategoryId,
        question_index: usize,
        hint: impl Into<String>,
        candidates: SmallVec<[Symbol; 4]>,
        answer: Symbol,
    ) -> Self {
        let hits = candidates.iter().filter(|c| **c == answer).count();
        assert!(hits == 1, "Candidate set must contain the answer exactly once");
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                assert!(
                    candidates[i] != candidates[j],
                    "Candidate symbols must be distinct"
                );
            }
        }

        Self {
            category,
            question_index,
            hint: hint.into(),
            candidates,
            answer,
        }
    }

    /// Candidate symbols in display order.
    #[must_use]
    pub fn candidates(&self) -> &[Symbol] {
        &self.candidates
    }

    /// Get a candidate by display position.
    #[must_use]
    pub fn candidate(&self, index: usize) -> Option<&Symbol> {
        self.candidates.get(index)
    }

    /// The correct symbol.
    #[must_use]
    pub fn answer(&self) -> &Symbol {
        &self.answer
    }

    /// Check a choice against the answer.
    #[must_use]
    pub fn is_correct(&self, choice: &Symbol) -> bool {
        choice == &self.answer
    }
}
