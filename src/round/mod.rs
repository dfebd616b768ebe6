//! Round building and play rules.
//!
//! [`RoundEngine`] turns registry content into playable [`Round`]s and
//! scores the answers. It holds no per-session state; everything mutable
//! lives in [`crate::core::Session`].

pub mod round;
pub mod engine;

pub use round::Round;
pub use engine::{AnswerOutcome, RoundEngine};
