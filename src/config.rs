//! Command line and environment configuration.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - A default database under the home directory

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::error::{FlashcardError, Result};

/// Directory under the home directory holding the default database
const DATA_DIR_NAME: &str = ".flashcards";

/// Default database file name
const DB_FILE_NAME: &str = "flashcards.db";

/// Study term/definition flashcards from the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "flashcards")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Database file (default: ~/.flashcards/flashcards.db)
    #[arg(long, global = true, env = "FLASHCARDS_DB")]
    pub db: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "FLASHCARDS_LOG", default_value = "info")]
    pub log_level: String,

    /// Output format for listings
    #[arg(long, global = true, default_value = "plain")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Review cards interactively (default)
    Review,

    /// List decks with their card counts
    Decks,

    /// Create a deck (no-op if it already exists)
    NewDeck {
        /// Deck name
        name: String,
    },

    /// Add a card to a deck
    Add {
        /// Deck name
        deck: String,
        /// Term shown on the front
        term: String,
        /// Definition revealed on the back
        definition: String,
    },

    /// List the cards in a deck
    Cards {
        /// Deck name
        deck: String,
    },

    /// Print one random card from a deck
    Draw {
        /// Deck name
        deck: String,
    },

    /// Show database location and totals
    Status,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Subcommand to run; no subcommand means review.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Review)
    }

    /// Resolve the database file path.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db {
            return Ok(path.clone());
        }

        let home = dirs::home_dir()
            .ok_or_else(|| FlashcardError::Config("could not find home directory".to_string()))?;
        Ok(home.join(DATA_DIR_NAME).join(DB_FILE_NAME))
    }

    /// Logs go next to the database.
    pub fn log_dir(&self) -> Result<PathBuf> {
        let db_path = self.database_path()?;
        Ok(db_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_review() {
        let config = Config::try_parse_from(["flashcards", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(config.command(), Command::Review);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_explicit_db_path() {
        let config = Config::try_parse_from(["flashcards", "--db", "/tmp/cards/x.db"]).unwrap();
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/cards/x.db"));
        assert_eq!(config.log_dir().unwrap(), PathBuf::from("/tmp/cards"));
    }

    #[test]
    fn test_bare_file_name_logs_to_cwd() {
        let config = Config::try_parse_from(["flashcards", "--db", "x.db"]).unwrap();
        assert_eq!(config.log_dir().unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_add_subcommand() {
        let config = Config::try_parse_from([
            "flashcards",
            "add",
            "Spanish1",
            "hola",
            "hello",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(
            config.command(),
            Command::Add {
                deck: "Spanish1".to_string(),
                term: "hola".to_string(),
                definition: "hello".to_string(),
            }
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_new_deck_requires_name() {
        assert!(Config::try_parse_from(["flashcards", "new-deck"]).is_err());
    }
}
