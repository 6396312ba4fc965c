//! Full-screen review UI.
//!
//! A deck bar, the card, and Show Answer / Next / Quit controls, with modal
//! dialogs for creating decks and adding cards.

mod app_state;
mod card_widget;
mod controls;
mod deck_bar;
mod dialog;
mod key_handler;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use crate::core::ReviewSession;
use crate::db::Database;
use crate::error::Result;

use app_state::TuiState;

pub async fn run(db: Arc<Database>) -> Result<()> {
    let mut session = ReviewSession::new(db);
    session.start().await?;
    let mut state = TuiState::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("review session closed");
    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut TuiState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state))?;

        if state.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    key_handler::handle_key(state, key).await;
                }
            }
        }
    }
}
