//! Storage behavior against a real database file.

mod common;

use common::{card, temp_database};
use flashcards_lib::{Database, FlashcardError};

#[tokio::test]
async fn spanish_deck_scenario() {
    let (db, _dir) = temp_database().await;

    let deck_id = db.create_deck("Spanish1").await.unwrap();
    let card_id = db.add_card(card(deck_id, "hola", "hello")).await.unwrap();

    assert_eq!(db.count_cards(deck_id).await.unwrap(), 1);

    let drawn = db.get_random_card(deck_id).await.unwrap().unwrap();
    assert_eq!(drawn.id, card_id);
    assert_eq!(drawn.deck_id, deck_id);
    assert_eq!((drawn.term.as_str(), drawn.definition.as_str()), ("hola", "hello"));
}

#[tokio::test]
async fn duplicate_deck_name_returns_same_id() {
    let (db, _dir) = temp_database().await;

    let first = db.create_deck("X").await.unwrap();
    let second = db.create_deck("X").await.unwrap();
    assert_eq!(first, second);

    let decks = db.get_decks().await.unwrap();
    assert_eq!(decks.len(), 1);
    assert_eq!(decks[0].name, "X");
}

#[tokio::test]
async fn counts_are_per_deck() {
    let (db, _dir) = temp_database().await;

    let a = db.create_deck("A").await.unwrap();
    let b = db.create_deck("B").await.unwrap();
    db.add_card(card(b, "one", "1")).await.unwrap();
    db.add_card(card(b, "two", "2")).await.unwrap();

    let before_b = db.count_cards(b).await.unwrap();
    db.add_card(card(a, "uno", "one")).await.unwrap();

    assert_eq!(db.count_cards(a).await.unwrap(), 1);
    assert_eq!(db.count_cards(b).await.unwrap(), before_b);
}

#[tokio::test]
async fn random_card_respects_deck() {
    let (db, _dir) = temp_database().await;

    let empty = db.create_deck("Empty").await.unwrap();
    let full = db.create_deck("Full").await.unwrap();
    let other = db.create_deck("Other").await.unwrap();
    for i in 0..5 {
        db.add_card(card(full, &format!("t{}", i), &format!("d{}", i)))
            .await
            .unwrap();
    }
    db.add_card(card(other, "x", "y")).await.unwrap();

    assert!(db.get_random_card(empty).await.unwrap().is_none());
    for _ in 0..25 {
        let drawn = db.get_random_card(full).await.unwrap().unwrap();
        assert_eq!(drawn.deck_id, full);
    }
}

#[tokio::test]
async fn decks_listed_by_name() {
    let (db, _dir) = temp_database().await;

    for name in ["French", "Biology", "Spanish1"] {
        db.create_deck(name).await.unwrap();
    }

    let names: Vec<String> = db
        .get_decks()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["Biology", "French", "Spanish1"]);
}

#[tokio::test]
async fn card_for_unknown_deck_is_rejected() {
    let (db, _dir) = temp_database().await;

    let err = db.add_card(card(999, "a", "b")).await.unwrap_err();
    assert!(matches!(err, FlashcardError::UnknownDeck(999)));
    assert_eq!(db.stats().await.unwrap().total_cards, 0);
}

#[tokio::test]
async fn data_survives_reopen() {
    let (db, dir) = temp_database().await;
    let path = dir.path().join("flashcards.db");

    let deck_id = db.create_deck("Spanish1").await.unwrap();
    db.add_card(card(deck_id, "hola", "hello")).await.unwrap();
    db.close().await;

    // Schema creation runs again on open and must leave data alone
    let reopened = Database::new(&path).await.unwrap();
    let decks = reopened.get_decks().await.unwrap();
    assert_eq!(decks.len(), 1);
    assert_eq!(reopened.count_cards(decks[0].id).await.unwrap(), 1);
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("cards.db");

    let db = Database::new(&path).await.unwrap();

    assert!(path.exists());
    assert_eq!(db.path(), path.as_path());
}
