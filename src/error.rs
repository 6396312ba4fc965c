/// Error types for flashcards
///
/// Input problems are caught before anything touches the database, so they
/// get their own variants instead of hiding behind a storage error.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for flashcards operations
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (creating the data directory, log file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (JSON output)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Deck name was empty after trimming
    #[error("Deck name cannot be empty.")]
    EmptyDeckName,

    /// Term or definition was empty after trimming
    #[error("Both fields are required.")]
    MissingCardFields,

    /// Tried to add a card with no deck selected
    #[error("Create/select a deck first.")]
    NoDeckSelected,

    /// No deck with this name
    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    /// No deck with this id
    #[error("Deck {0} does not exist")]
    UnknownDeck(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for flashcards operations
pub type Result<T> = std::result::Result<T, FlashcardError>;

impl FlashcardError {
    /// True for errors caused by what the user typed, as opposed to the
    /// store or the environment failing.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FlashcardError::EmptyDeckName
                | FlashcardError::MissingCardFields
                | FlashcardError::NoDeckSelected
        )
    }

    /// Convert FlashcardError to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FlashcardError::Database(e) => {
                format!("Could not save or load flashcards. Details: {}", e)
            }
            FlashcardError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            FlashcardError::Serialization(e) => format!("Data format error: {}", e),
            FlashcardError::DeckNotFound(name) => format!("No deck named '{}'", name),
            FlashcardError::UnknownDeck(id) => {
                format!("Deck {} no longer exists. Pick another deck.", id)
            }
            FlashcardError::Config(msg) => format!("Configuration issue: {}", msg),
            // Validation messages are already written for the user
            other => other.to_string(),
        }
    }
}
