use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

use super::app_state::{Mode, TuiState};
use super::{card_widget, controls, deck_bar, dialog};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Deck bar, card, controls
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(size);

    deck_bar::draw(f, outer[0], state);
    card_widget::draw(f, outer[1], state);
    controls::draw(f, outer[2], state);

    match state.mode {
        Mode::Review => {}
        Mode::DeckPicker => dialog::draw_deck_picker(f, size, state),
        Mode::NewDeck => dialog::draw_new_deck(f, size, state),
        Mode::AddCard => dialog::draw_add_card(f, size, state),
    }

    if let Some(notice) = &state.notice {
        dialog::draw_notice(f, size, notice);
    }
}
