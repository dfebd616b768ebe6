//! Session configuration.
//!
//! Tunable parameters for a quiz session. Defaults reproduce the classic
//! game: a 40-second countdown, 10 points per correct answer, and four
//! candidate symbols per question. Hosts that want house rules build a
//! [`QuizConfig`] with the `with_*` methods and hand it to the engine.

use serde::{Deserialize, Serialize};

/// Tunable rule parameters for a quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Seconds on the countdown when a timed session starts.
    pub starting_seconds: u32,

    /// Points awarded for each correct answer.
    pub points_per_correct: u32,

    /// Number of candidate symbols presented per question, including the
    /// correct one. At least 2.
    pub choice_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            starting_seconds: 40,
            points_per_correct: 10,
            choice_count: 4,
        }
    }
}

impl QuizConfig {
    /// Standard configuration: 40 seconds, 10 points per answer, 4 choices.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Set the countdown length for timed sessions.
    #[must_use]
    pub fn with_starting_seconds(mut self, seconds: u32) -> Self {
        self.starting_seconds = seconds;
        self
    }

    /// Set the score increment per correct answer.
    #[must_use]
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    /// Set the candidate-set size.
    ///
    /// # Panics
    ///
    /// Panics if `count < 2`. A question needs the correct symbol plus at
    /// least one decoy.
    #[must_use]
    pub fn with_choice_count(mut self, count: usize) -> Self {
        assert!(count >= 2, "Must present at least 2 choices");
        self.choice_count = count;
        self
    }

    /// Decoys drawn per question: everything in the candidate set except
    /// the correct symbol.
    #[must_use]
    pub fn decoy_count(&self) -> usize {
        self.choice_count - 1
    }
}
