//! The emoji guessing game.
//!
//! The playable assembly of the engine crates' parts:
//! - Three built-in categories (fruits, foods, sports), 8 questions each
//! - A hint and four candidate emoji per question, +10 per correct guess
//! - A 40-second countdown in timed mode; endless mode skips the clock
//! - Finished timed runs land in the injected history store

mod categories;
mod game;

pub use categories::{builtin_categories, FOODS, FRUITS, SPORTS};
pub use game::{AnswerFeedback, EmojiQuiz, EmojiQuizBuilder, EndReason};
