//! Quiz content: symbols, questions, categories, and the registry.
//!
//! Content is static data compiled into or loaded by the host; the engine
//! never mutates it during play. The bundled classic set lives in
//! [`crate::games::emoji::builtin_categories`].

pub mod question;
pub mod category;
pub mod registry;

pub use question::{Question, Symbol};
pub use category::{Category, CategoryId};
pub use registry::CategoryRegistry;
