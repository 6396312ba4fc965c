// flashcards - review term/definition decks from the terminal
//
// Parses CLI args and dispatches to handlers. No subcommand opens the
// review screen.

use anyhow::Context;
use flashcards_lib::{
    config::{Command, Config, OutputFormat},
    core::{validate_card, validate_deck_name},
    db::{CardInput, Deck},
    logging, tui, Database, FlashcardError,
};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse_args();

    let db_path = config.database_path()?;
    let _log_guard = logging::init_tracing(&config.log_dir()?, &config.log_level)
        .context("Failed to set up logging")?;

    let db = Database::new(&db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let result = match config.command() {
        Command::Review => tui::run(Arc::new(db.clone())).await,
        Command::Decks => handle_decks(&db, config.format).await,
        Command::NewDeck { name } => handle_new_deck(&db, &name).await,
        Command::Add {
            deck,
            term,
            definition,
        } => handle_add(&db, &deck, &term, &definition).await,
        Command::Cards { deck } => handle_cards(&db, &deck, config.format).await,
        Command::Draw { deck } => handle_draw(&db, &deck, config.format).await,
        Command::Status => handle_status(&db).await,
    };

    db.close().await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result.map_err(|e| anyhow::anyhow!(e.user_message()))
}

async fn find_deck(db: &Database, name: &str) -> flashcards_lib::Result<Deck> {
    db.get_deck_by_name(name)
        .await?
        .ok_or_else(|| FlashcardError::DeckNotFound(name.to_string()))
}

async fn handle_decks(db: &Database, format: OutputFormat) -> flashcards_lib::Result<()> {
    let decks = db.get_deck_summaries().await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&decks)?);
        return Ok(());
    }

    if decks.is_empty() {
        println!("No decks yet. Create one with: flashcards new-deck <NAME>");
    } else {
        println!("\nDecks:");
        println!("{}", "=".repeat(40));
        for deck in &decks {
            println!("  {:<28} {:>4} card(s)", deck.name, deck.card_count);
        }
        println!("{}", "=".repeat(40));
    }

    Ok(())
}

async fn handle_new_deck(db: &Database, raw_name: &str) -> flashcards_lib::Result<()> {
    let name = validate_deck_name(raw_name)?;
    let id = db.create_deck(&name).await?;
    println!("Deck '{}' ready (id {})", name, id);
    Ok(())
}

async fn handle_add(
    db: &Database,
    deck_name: &str,
    term: &str,
    definition: &str,
) -> flashcards_lib::Result<()> {
    let fields = validate_card(term, definition)?;
    let deck = find_deck(db, deck_name).await?;

    db.add_card(CardInput {
        deck_id: deck.id,
        term: fields.term,
        definition: fields.definition,
    })
    .await?;

    let total = db.count_cards(deck.id).await?;
    println!("Added to '{}' ({} card(s) in this deck)", deck.name, total);
    Ok(())
}

async fn handle_cards(
    db: &Database,
    deck_name: &str,
    format: OutputFormat,
) -> flashcards_lib::Result<()> {
    let deck = find_deck(db, deck_name).await?;
    let cards = db.get_cards(deck.id).await?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No cards in '{}' yet.", deck.name);
    } else {
        println!("\n{} ({} card(s)):", deck.name, cards.len());
        println!("{}", "=".repeat(60));
        for (i, card) in cards.iter().enumerate() {
            println!("{:3}. {}  ->  {}", i + 1, card.term, card.definition);
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_draw(
    db: &Database,
    deck_name: &str,
    format: OutputFormat,
) -> flashcards_lib::Result<()> {
    let deck = find_deck(db, deck_name).await?;
    let card = db.get_random_card(deck.id).await?;

    match (card, format) {
        (Some(card), OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(&card)?),
        (Some(card), OutputFormat::Plain) => {
            println!("{}", card.term);
            println!("  {}", card.definition);
        }
        (None, OutputFormat::Json) => println!("null"),
        (None, OutputFormat::Plain) => println!("No cards in '{}' yet.", deck.name),
    }

    Ok(())
}

async fn handle_status(db: &Database) -> flashcards_lib::Result<()> {
    let stats = db.stats().await?;

    println!("\nflashcards v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(60));
    println!("  Database: {}", db.path().display());
    println!("  Decks:    {}", stats.total_decks);
    println!("  Cards:    {}", stats.total_cards);
    println!("{}", "=".repeat(60));

    Ok(())
}
