//! Questions - the symbol/hint pairs a quiz is made of.
//!
//! A `Question` pairs the symbol to be guessed (an emoji glyph) with the
//! hint text shown to the player. Questions carry no play-time state;
//! rounds built from them live in [`crate::round`].

use serde::{Deserialize, Serialize};

/// A symbol a player can guess: one emoji glyph.
///
/// Stored as a string because an emoji is often more than one `char`
/// (skin tones, ZWJ sequences like 🏌️‍♂️).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// Get the glyph as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

impl From<String> for Symbol {
    fn from(glyph: String) -> Self {
        Self(glyph)
    }
}

/// One quiz question: a symbol and the hint that describes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The symbol the player has to guess.
    pub symbol: Symbol,

    /// Hint text shown to the player.
    pub hint: String,
}

impl Question {
    /// Create a new question.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>, hint: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            hint: hint.into(),
        }
    }
}
