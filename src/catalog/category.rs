//! Categories - named, ordered collections of questions.
//!
//! A `Category` holds the questions for one theme ("Fruits", "Sports").
//! Question order inside a category is significant: the engine walks it
//! by index, so the order here is the order of play.

use serde::{Deserialize, Serialize};

use super::question::{Question, Symbol};

/// Unique identifier for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// A themed set of questions.
///
/// Symbols within a category must be distinct - decoys are drawn from the
/// same category, so a duplicate would let a candidate set contain the
/// correct answer twice.
///
/// ## Example
///
/// ```
/// use emoji_quiz::catalog::{Category, CategoryId};
///
/// let fruits = Category::new(CategoryId::new(0), "Fruits")
///     .with_question("🍎", "A red or green fruit, often used for pies")
///     .with_question("🍌", "A long yellow fruit that monkeys love");
///
/// assert_eq!(fruits.question_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for this category.
    pub id: CategoryId,

    /// Category name (for display/debugging).
    pub name: String,

    /// Questions in play order.
    questions: Vec<Question>,
}

impl Category {
    /// Create a new empty category.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Add a question (builder pattern).
    ///
    /// Panics if the symbol is already present in this category.
    #[must_use]
    pub fn with_question(mut self, symbol: impl Into<Symbol>, hint: impl Into<String>) -> Self {
        self.push_question(Question::new(symbol, hint));
        self
    }

    /// Add a question.
    ///
    /// Panics if the symbol is already present in this category.
    pub fn push_question(&mut self, question: Question) {
        if self.contains_symbol(&question.symbol) {
            panic!(
                "Symbol {} already present in category '{}'",
                question.symbol, self.name
            );
        }
        self.questions.push(question);
    }

    /// Get a question by index.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// All questions in play order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions (and therefore symbols) in this category.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Check if the category has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over the symbols in this category.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.questions.iter().map(|q| &q.symbol)
    }

    /// Check whether a symbol belongs to this category.
    #[must_use]
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.questions.iter().any(|q| &q.symbol == symbol)
    }
}
