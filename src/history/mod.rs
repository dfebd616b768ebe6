//! Persisted score history.
//!
//! An append-only log of finished timed sessions, behind the
//! [`HistoryStore`] trait so hosts choose the backing: a JSON file in
//! production, memory in tests.

pub mod entry;
pub mod store;
pub mod file;

pub use entry::HistoryEntry;
pub use store::{HistoryError, HistoryStore, InMemoryHistory};
pub use file::JsonFileHistory;
