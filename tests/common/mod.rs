//! Shared helpers for integration tests.

use flashcards_lib::db::CardInput;
use flashcards_lib::Database;
use tempfile::TempDir;

/// A file-backed database in its own temp directory.
///
/// Keep the `TempDir` alive for as long as the database is used.
pub async fn temp_database() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::new(dir.path().join("flashcards.db"))
        .await
        .expect("open database");
    (db, dir)
}

pub fn card(deck_id: i64, term: &str, definition: &str) -> CardInput {
    CardInput {
        deck_id,
        term: term.to_string(),
        definition: definition.to_string(),
    }
}
