/// flashcards library
///
/// Decks of term/definition cards stored in SQLite, and the review
/// session and terminal UI built on top of them.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod tui;

// Re-exports for convenience
pub use db::Database;
pub use error::{FlashcardError, Result};
