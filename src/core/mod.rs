//! Core engine types: modes, configuration, RNG, errors, session state.
//!
//! This module contains the fundamental building blocks that are
//! category-agnostic. Quiz content lives in [`crate::catalog`]; the rules
//! that drive play live in [`crate::round`].

pub mod mode;
pub mod config;
pub mod rng;
pub mod error;
pub mod session;

pub use mode::GameMode;
pub use config::QuizConfig;
pub use rng::{QuizRng, QuizRngState};
pub use error::QuizError;
pub use session::{AnswerRecord, Session};
