// Cleans up and checks what the user typed before it goes near the database

use crate::error::{FlashcardError, Result};

/// A card that passed validation, ready to store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFields {
    pub term: String,
    pub definition: String,
}

/// Trim a deck name and reject it if nothing is left
pub fn validate_deck_name(raw: &str) -> Result<String> {
    let name = sanitize(raw);
    if name.is_empty() {
        return Err(FlashcardError::EmptyDeckName);
    }
    Ok(name)
}

/// Both sides of a card are required
pub fn validate_card(term: &str, definition: &str) -> Result<CardFields> {
    let term = sanitize(term);
    let definition = sanitize(definition);
    if term.is_empty() || definition.is_empty() {
        return Err(FlashcardError::MissingCardFields);
    }
    Ok(CardFields { term, definition })
}

// Null bytes out, edges trimmed. Inner whitespace is kept as typed.
fn sanitize(raw: &str) -> String {
    raw.replace('\0', "").trim().to_string()
}
