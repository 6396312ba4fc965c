/// SQL query functions for database operations
///
/// Deck and card queries. Decks and cards are only ever inserted and read.

use crate::db::models::*;
use crate::db::Database;
use crate::error::{FlashcardError, Result};

impl Database {
    /// Create a deck, or return the existing one with the same name
    ///
    /// # Arguments
    /// * `name` - Deck name, stored as given
    ///
    /// # Returns
    /// * `Ok(i64)` - The deck ID (existing or new)
    /// * `Err(FlashcardError)` - If database operation fails
    pub async fn create_deck(&self, name: &str) -> Result<i64> {
        let mut tx = self.pool().begin().await?;

        let inserted = sqlx::query("INSERT OR IGNORE INTO decks (name) VALUES (?)")
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let id: i64 = sqlx::query_scalar("SELECT id FROM decks WHERE name = ?")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        if inserted > 0 {
            tracing::info!(deck_id = id, name, "created deck");
        } else {
            tracing::debug!(deck_id = id, name, "deck already exists");
        }

        Ok(id)
    }

    /// Add a card to a deck
    ///
    /// # Returns
    /// * `Ok(i64)` - The new card ID
    /// * `Err(FlashcardError::UnknownDeck)` - If the deck doesn't exist
    pub async fn add_card(&self, input: CardInput) -> Result<i64> {
        let mut tx = self.pool().begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM decks WHERE id = ?")
            .bind(input.deck_id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Err(FlashcardError::UnknownDeck(input.deck_id));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO cards (deck_id, term, definition) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(input.deck_id)
        .bind(&input.term)
        .bind(&input.definition)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(card_id = id, deck_id = input.deck_id, "added card");

        Ok(id)
    }

    /// Get all decks, ordered by name
    pub async fn get_decks(&self) -> Result<Vec<Deck>> {
        let decks = sqlx::query_as::<_, Deck>("SELECT id, name FROM decks ORDER BY name")
            .fetch_all(self.pool())
            .await?;

        Ok(decks)
    }

    /// Get a deck by exact name
    pub async fn get_deck_by_name(&self, name: &str) -> Result<Option<Deck>> {
        let deck = sqlx::query_as::<_, Deck>("SELECT id, name FROM decks WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool())
            .await?;

        Ok(deck)
    }

    /// Get all decks with their card counts, ordered by name
    pub async fn get_deck_summaries(&self) -> Result<Vec<DeckSummary>> {
        let summaries = sqlx::query_as::<_, DeckSummary>(
            r#"
            SELECT d.id, d.name, COUNT(c.id) AS card_count
            FROM decks d
            LEFT JOIN cards c ON c.deck_id = d.id
            GROUP BY d.id, d.name
            ORDER BY d.name
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(summaries)
    }

    /// Get the cards of a deck in insertion order
    pub async fn get_cards(&self, deck_id: i64) -> Result<Vec<Card>> {
        let cards = sqlx::query_as::<_, Card>(
            "SELECT id, deck_id, term, definition FROM cards WHERE deck_id = ? ORDER BY id",
        )
        .bind(deck_id)
        .fetch_all(self.pool())
        .await?;

        Ok(cards)
    }

    /// Pick one card from a deck uniformly at random
    ///
    /// # Returns
    /// * `Ok(None)` - The deck has no cards (or doesn't exist)
    pub async fn get_random_card(&self, deck_id: i64) -> Result<Option<Card>> {
        let card = sqlx::query_as::<_, Card>(
            "SELECT id, deck_id, term, definition FROM cards WHERE deck_id = ? ORDER BY RANDOM() LIMIT 1",
        )
        .bind(deck_id)
        .fetch_optional(self.pool())
        .await?;

        tracing::debug!(deck_id, card_id = card.as_ref().map(|c| c.id), "drew random card");

        Ok(card)
    }

    /// Count the cards in a deck
    pub async fn count_cards(&self, deck_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards WHERE deck_id = ?")
            .bind(deck_id)
            .fetch_one(self.pool())
            .await?;

        Ok(count)
    }
}
