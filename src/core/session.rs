//! Session state.
//!
//! ## Session
//!
//! The per-game state: score, question index, the in-flight round, the
//! countdown bookkeeping, and the RNG. All play-time randomness draws from
//! the session's own [`QuizRng`], so two sessions never contend for a
//! shared stream and a seeded session replays exactly.
//!
//! ## AnswerRecord
//!
//! One entry per submitted answer, kept in an `im::Vector` so cloning a
//! session mid-game (for undo, inspection, or tests) is O(1).
//!
//! Sessions are plain data. The scoring and round-building rules live in
//! [`crate::round::RoundEngine`], which mutates sessions through the
//! methods here.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::mode::GameMode;
use super::rng::QuizRng;
use crate::catalog::{CategoryId, Symbol};
use crate::round::Round;

/// Record of one submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Which question this was (0-based, in play order).
    pub question_index: usize,

    /// Category of the round on display when the answer came in.
    /// `None` when no round was loaded.
    pub category: Option<CategoryId>,

    /// The correct symbol.
    pub answer: Symbol,

    /// The symbol the player picked.
    pub chosen: Symbol,

    /// Whether the pick matched the answer.
    pub correct: bool,
}

/// Full state of one quiz session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Play mode this session was started in.
    mode: GameMode,

    // === Progress ===
    /// Accumulated score.
    score: u32,

    /// Index of the next question to load (0-based).
    question_index: usize,

    // === Countdown bookkeeping ===
    /// Seconds the countdown started from.
    starting_seconds: u32,

    /// Seconds left, mirrored from the timer by the host on every tick.
    remaining_seconds: u32,

    /// The round currently presented, if any.
    round: Option<Round>,

    /// Every answer submitted so far, in order.
    answers: Vector<AnswerRecord>,

    /// Deterministic RNG.
    pub rng: QuizRng,
}

impl Session {
    /// Create a fresh session.
    ///
    /// Usually called through [`crate::round::RoundEngine::new_session`],
    /// which fills in the configured countdown length.
    #[must_use]
    pub fn new(mode: GameMode, starting_seconds: u32, rng: QuizRng) -> Self {
        Self {
            mode,
            score: 0,
            question_index: 0,
            starting_seconds,
            remaining_seconds: starting_seconds,
            round: None,
            answers: Vector::new(),
            rng,
        }
    }

    // === Accessors ===

    /// Play mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index of the next question to load (0-based).
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Seconds the countdown started from.
    #[must_use]
    pub fn starting_seconds(&self) -> u32 {
        self.starting_seconds
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Seconds spent so far: starting minus remaining.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.starting_seconds.saturating_sub(self.remaining_seconds)
    }

    /// The round currently presented, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Every answer submitted so far, in order.
    #[must_use]
    pub fn answers(&self) -> &Vector<AnswerRecord> {
        &self.answers
    }

    /// How many answers were correct.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|r| r.correct).count()
    }

    // === Mutators (called by the engine and the host) ===

    /// Install a newly built round as the current one.
    pub fn set_round(&mut self, round: Round) {
        self.round = Some(round);
    }

    /// Drop the current round, if any.
    pub fn clear_round(&mut self) {
        self.round = None;
    }

    /// Add points to the score.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Move the question index forward by one.
    pub fn advance_index(&mut self) {
        self.question_index += 1;
    }

    /// Append an answer to the log.
    pub fn record_answer(&mut self, record: AnswerRecord) {
        self.answers.push_back(record);
    }

    /// Mirror the countdown into the session.
    pub fn set_remaining_seconds(&mut self, seconds: u32) {
        self.remaining_seconds = seconds;
    }

    /// Reset progress for a fresh run: score, index, round, answers, and
    /// countdown all return to their starting values.
    ///
    /// The RNG stream deliberately continues where it left off, so a replay
    /// after reset sees new questions rather than the same opening.
    pub fn reset(&mut self) {
        self.score = 0;
        self.question_index = 0;
        self.remaining_seconds = self.starting_seconds;
        self.round = None;
        self.answers = Vector::new();
    }
}
