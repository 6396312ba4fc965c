/// Review session state
///
/// Everything the screen shows lives here: the deck list, which deck is
/// selected, the card on display and whether its answer is revealed.
/// Each user action is one method: call storage, then update state.

use crate::core::input::{validate_card, validate_deck_name};
use crate::db::{Card, CardInput, Database, Deck};
use crate::error::{FlashcardError, Result};
use std::sync::Arc;

pub const PROMPT_NO_DECKS: &str = "Create a deck to start";
pub const PROMPT_SELECT_DECK: &str = "Select a deck to start";
pub const PROMPT_EMPTY_DECK: &str = "No cards yet. Press 'a' to add one.";

/// What the card area should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView<'a> {
    /// No card to review; show a hint instead
    Prompt(&'a str),
    /// A card, with its definition hidden or revealed
    Card {
        term: &'a str,
        definition: Option<&'a str>,
        total: i64,
    },
}

pub struct ReviewSession {
    db: Arc<Database>,
    decks: Vec<Deck>,
    selected: Option<Deck>,
    current_card: Option<Card>,
    answer_shown: bool,
    card_total: i64,
    prompt: &'static str,
}

impl ReviewSession {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            decks: Vec::new(),
            selected: None,
            current_card: None,
            answer_shown: false,
            card_total: 0,
            prompt: PROMPT_SELECT_DECK,
        }
    }

    /// Load decks and pick one to review
    pub async fn start(&mut self) -> Result<()> {
        self.refresh_decks().await
    }

    /// Reload the deck list
    ///
    /// Keeps the selected deck if it still exists, otherwise falls back to
    /// the first deck by name.
    pub async fn refresh_decks(&mut self) -> Result<()> {
        self.decks = self.db.get_decks().await?;

        let Some(first) = self.decks.first() else {
            self.selected = None;
            self.clear_card(PROMPT_NO_DECKS);
            return Ok(());
        };

        let keep = self
            .selected
            .as_ref()
            .and_then(|current| self.decks.iter().find(|d| d.name == current.name))
            .unwrap_or(first)
            .name
            .clone();

        self.select_deck(&keep).await
    }

    /// Select a deck by name and draw a card from it
    ///
    /// Unknown names clear the selection.
    pub async fn select_deck(&mut self, name: &str) -> Result<()> {
        self.selected = self.decks.iter().find(|d| d.name == name).cloned();
        tracing::debug!(deck = name, found = self.selected.is_some(), "select deck");
        self.next_card().await
    }

    /// Draw another random card from the selected deck
    pub async fn next_card(&mut self) -> Result<()> {
        let Some(deck_id) = self.selected.as_ref().map(|d| d.id) else {
            self.clear_card(PROMPT_SELECT_DECK);
            return Ok(());
        };

        let total = self.db.count_cards(deck_id).await?;
        if total == 0 {
            self.clear_card(PROMPT_EMPTY_DECK);
            return Ok(());
        }

        match self.db.get_random_card(deck_id).await? {
            Some(card) => {
                self.current_card = Some(card);
                self.answer_shown = false;
                self.card_total = total;
            }
            None => self.clear_card(PROMPT_EMPTY_DECK),
        }

        Ok(())
    }

    /// Reveal the current card's definition
    ///
    /// Returns false when there is no card to reveal.
    pub fn show_answer(&mut self) -> bool {
        if self.current_card.is_none() {
            return false;
        }
        self.answer_shown = true;
        true
    }

    /// Create a deck (or reuse one with the same name) and switch to it
    pub async fn create_deck(&mut self, raw_name: &str) -> Result<i64> {
        let name = validate_deck_name(raw_name)?;
        let id = self.db.create_deck(&name).await?;

        self.decks = self.db.get_decks().await?;
        self.select_deck(&name).await?;

        Ok(id)
    }

    /// Add a card to the selected deck, then show a fresh card
    pub async fn add_card(&mut self, term: &str, definition: &str) -> Result<i64> {
        let deck_id = self
            .selected
            .as_ref()
            .map(|d| d.id)
            .ok_or(FlashcardError::NoDeckSelected)?;
        let fields = validate_card(term, definition)?;

        let id = self
            .db
            .add_card(CardInput {
                deck_id,
                term: fields.term,
                definition: fields.definition,
            })
            .await?;

        self.next_card().await?;

        Ok(id)
    }

    pub fn view(&self) -> CardView<'_> {
        match &self.current_card {
            Some(card) => CardView::Card {
                term: &card.term,
                definition: self.answer_shown.then_some(card.definition.as_str()),
                total: self.card_total,
            },
            None => CardView::Prompt(self.prompt),
        }
    }

    /// "Show Answer" and "Next" only work while a card is displayed
    pub fn can_review(&self) -> bool {
        self.current_card.is_some()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn selected_deck(&self) -> Option<&Deck> {
        self.selected.as_ref()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current_card.as_ref()
    }

    pub fn answer_shown(&self) -> bool {
        self.answer_shown
    }

    fn clear_card(&mut self, prompt: &'static str) {
        self.current_card = None;
        self.answer_shown = false;
        self.card_total = 0;
        self.prompt = prompt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> (ReviewSession, Arc<Database>) {
        let db = Arc::new(Database::new_test().await.unwrap());
        let session = ReviewSession::new(Arc::clone(&db));
        (session, db)
    }

    #[tokio::test]
    async fn test_start_without_decks() {
        let (mut session, _db) = setup().await;

        session.start().await.unwrap();

        assert!(session.selected_deck().is_none());
        assert_eq!(session.view(), CardView::Prompt(PROMPT_NO_DECKS));
        assert!(!session.can_review());
    }

    #[tokio::test]
    async fn test_first_deck_gets_selected() {
        let (mut session, _db) = setup().await;
        session.start().await.unwrap();

        session.create_deck("  Spanish1 ").await.unwrap();

        assert_eq!(session.selected_deck().unwrap().name, "Spanish1");
        assert_eq!(session.view(), CardView::Prompt(PROMPT_EMPTY_DECK));
    }

    #[tokio::test]
    async fn test_start_selects_first_alphabetically() {
        let (mut session, db) = setup().await;
        db.create_deck("Zulu").await.unwrap();
        db.create_deck("Alpha").await.unwrap();

        session.start().await.unwrap();

        assert_eq!(session.selected_deck().unwrap().name, "Alpha");
    }

    #[tokio::test]
    async fn test_refresh_keeps_valid_selection() {
        let (mut session, db) = setup().await;
        db.create_deck("Alpha").await.unwrap();
        db.create_deck("Zulu").await.unwrap();
        session.start().await.unwrap();

        session.select_deck("Zulu").await.unwrap();
        db.create_deck("Bravo").await.unwrap();
        session.refresh_decks().await.unwrap();

        assert_eq!(session.selected_deck().unwrap().name, "Zulu");
        assert_eq!(session.decks().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_deck_clears_selection() {
        let (mut session, db) = setup().await;
        db.create_deck("Alpha").await.unwrap();
        session.start().await.unwrap();

        session.select_deck("Nope").await.unwrap();

        assert!(session.selected_deck().is_none());
        assert_eq!(session.view(), CardView::Prompt(PROMPT_SELECT_DECK));
    }

    #[tokio::test]
    async fn test_add_card_then_reveal() {
        let (mut session, _db) = setup().await;
        session.create_deck("Spanish1").await.unwrap();

        session.add_card("hola", "hello").await.unwrap();

        assert_eq!(
            session.view(),
            CardView::Card {
                term: "hola",
                definition: None,
                total: 1
            }
        );

        assert!(session.show_answer());
        assert_eq!(
            session.view(),
            CardView::Card {
                term: "hola",
                definition: Some("hello"),
                total: 1
            }
        );

        // Next hides the answer again
        session.next_card().await.unwrap();
        assert!(!session.answer_shown());
    }

    #[tokio::test]
    async fn test_show_answer_without_card() {
        let (mut session, _db) = setup().await;
        session.start().await.unwrap();

        assert!(!session.show_answer());
        assert!(!session.answer_shown());
    }

    #[tokio::test]
    async fn test_add_card_needs_deck() {
        let (mut session, db) = setup().await;
        session.start().await.unwrap();

        let err = session.add_card("hola", "hello").await.unwrap_err();
        assert!(matches!(err, FlashcardError::NoDeckSelected));
        assert_eq!(db.stats().await.unwrap().total_cards, 0);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_storage() {
        let (mut session, db) = setup().await;
        session.start().await.unwrap();

        let err = session.create_deck("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(db.stats().await.unwrap().total_decks, 0);

        session.create_deck("Spanish1").await.unwrap();
        let err = session.add_card("hola", "").await.unwrap_err();
        assert!(matches!(err, FlashcardError::MissingCardFields));
        assert_eq!(db.stats().await.unwrap().total_cards, 0);
    }

    #[tokio::test]
    async fn test_create_existing_deck_switches_to_it() {
        let (mut session, db) = setup().await;
        let existing = db.create_deck("Alpha").await.unwrap();
        db.create_deck("Bravo").await.unwrap();
        session.start().await.unwrap();
        session.select_deck("Bravo").await.unwrap();

        let id = session.create_deck("Alpha").await.unwrap();

        assert_eq!(id, existing);
        assert_eq!(session.selected_deck().unwrap().name, "Alpha");
        assert_eq!(session.decks().len(), 2);
    }
}
