//! Logging setup.
//!
//! The terminal UI owns stdout and stderr, so log lines go to a file next
//! to the database instead.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{FlashcardError, Result};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "flashcards.log";

/// Initialize tracing, writing to `<log_dir>/flashcards.log`.
///
/// `RUST_LOG` wins over `level` when set. Keep the returned guard alive for
/// the life of the program; dropping it flushes pending lines.
pub fn init_tracing(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn", level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| FlashcardError::Config(format!("logging already initialized: {}", e)))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "flashcards starting");

    Ok(guard)
}
