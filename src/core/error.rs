//! Engine errors.
//!
//! Only two things can go wrong while playing: the active category is too
//! small to fill a candidate set, or a question is requested past the end
//! of the active category. Both are recoverable and carry enough context
//! for the host to explain the failure. Misconfigured category *data* is
//! a programming error and panics at registration instead (see
//! [`crate::catalog`]).

use thiserror::Error;

/// A recoverable failure while building or advancing a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The category cannot fill a candidate set: it has fewer symbols than
    /// the configured choice count.
    #[error(
        "category '{category}' has {available} symbols, needs {required} to fill a candidate set"
    )]
    InsufficientChoices {
        /// Name of the offending category.
        category: String,
        /// Symbols the category actually holds.
        available: usize,
        /// Symbols a candidate set requires.
        required: usize,
    },

    /// The requested question index is past the end of the active category.
    #[error("question index {index} out of range for category '{category}' ({question_count} questions)")]
    IndexOutOfRange {
        /// Name of the category the index was checked against.
        category: String,
        /// The out-of-range index.
        index: usize,
        /// Number of questions that category holds.
        question_count: usize,
    },
}
