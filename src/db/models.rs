/// Data models for database entities
///
/// All models map to database rows and use sqlx for type-safe queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named collection of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Deck {
    pub id: i64,
    pub name: String,
}

/// A term/definition pair belonging to a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub term: String,
    pub definition: String,
}

/// Input for adding a new card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardInput {
    pub deck_id: i64,
    pub term: String,
    pub definition: String,
}

/// Deck listing with its card count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DeckSummary {
    pub id: i64,
    pub name: String,
    pub card_count: i64,
}

impl DeckSummary {
    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }
}
