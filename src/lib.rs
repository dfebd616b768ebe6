//! # emoji-quiz
//!
//! A single-player emoji-guessing quiz engine: multiple-choice questions
//! drawn from fixed categories, timed or endless play, and a persisted
//! history of past sessions.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine computes; hosts render. No layout,
//!    alerts, or navigation live here. A UI drives the operations and
//!    displays their outputs.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `QuizRng`.
//!    The same seed replays the same categories, decoys, and shuffle
//!    orders, so tests can assert exact rounds.
//!
//! 3. **Configuration Over Convention**: Question banks and tunables
//!    (round length, points, candidate count) are supplied at startup via
//!    `CategoryRegistry` and `QuizConfig`. The engine hardcodes no
//!    categories.
//!
//! ## Modules
//!
//! - `core`: Game mode, configuration, RNG, errors, session state
//! - `catalog`: Symbols, questions, categories, and the registry
//! - `round`: Round values and the engine that drives them
//! - `timer`: The countdown state machine for timed sessions
//! - `history`: Append-only score history stores
//! - `games`: The assembled emoji quiz built on the engine

pub mod core;
pub mod catalog;
pub mod round;
pub mod timer;
pub mod history;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    AnswerRecord, GameMode, QuizConfig, QuizError, QuizRng, QuizRngState, Session,
};

pub use crate::catalog::{Category, CategoryId, CategoryRegistry, Question, Symbol};

pub use crate::round::{AnswerOutcome, Round, RoundEngine};

pub use crate::timer::{SessionTimer, TimerEvent, TimerStatus};

pub use crate::history::{
    HistoryEntry, HistoryError, HistoryStore, InMemoryHistory, JsonFileHistory,
};

pub use crate::games::emoji::{
    builtin_categories, AnswerFeedback, EmojiQuiz, EmojiQuizBuilder, EndReason,
};
