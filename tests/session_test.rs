//! Review session flows against a real database file.

mod common;

use std::sync::Arc;

use common::{card, temp_database};
use flashcards_lib::core::{CardView, ReviewSession};
use flashcards_lib::FlashcardError;

#[tokio::test]
async fn first_run_then_study() {
    let (db, _dir) = temp_database().await;
    let mut session = ReviewSession::new(Arc::new(db));

    session.start().await.unwrap();
    assert!(!session.can_review());

    session.create_deck("Spanish1").await.unwrap();
    session.add_card("hola", "hello").await.unwrap();

    assert!(session.can_review());
    assert!(matches!(session.view(), CardView::Card { definition: None, .. }));

    session.show_answer();
    assert!(matches!(
        session.view(),
        CardView::Card {
            definition: Some("hello"),
            total: 1,
            ..
        }
    ));
}

#[tokio::test]
async fn relaunch_picks_first_deck_alphabetically() {
    let (db, _dir) = temp_database().await;
    let db = Arc::new(db);
    let verbs = db.create_deck("Verbs").await.unwrap();
    let animals = db.create_deck("Animals").await.unwrap();
    db.add_card(card(verbs, "correr", "to run")).await.unwrap();
    db.add_card(card(animals, "perro", "dog")).await.unwrap();

    let mut session = ReviewSession::new(Arc::clone(&db));
    session.start().await.unwrap();

    assert_eq!(session.selected_deck().unwrap().name, "Animals");
    assert_eq!(session.current_card().unwrap().term, "perro");
}

#[tokio::test]
async fn validation_errors_are_distinct_from_storage_errors() {
    let (db, _dir) = temp_database().await;
    let mut session = ReviewSession::new(Arc::new(db));
    session.start().await.unwrap();

    let err = session.create_deck("").await.unwrap_err();
    assert!(matches!(err, FlashcardError::EmptyDeckName));
    assert!(err.is_validation());

    let err = session.add_card("hola", "hello").await.unwrap_err();
    assert!(matches!(err, FlashcardError::NoDeckSelected));
}
