use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::{Mode, TuiState};

pub async fn handle_key(state: &mut TuiState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    // A notice blocks everything until dismissed
    if state.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.notice = None;
        }
        return;
    }

    match state.mode {
        Mode::Review => handle_review_key(state, key).await,
        Mode::DeckPicker => handle_picker_key(state, key).await,
        Mode::NewDeck | Mode::AddCard => handle_input_key(state, key).await,
    }
}

async fn handle_review_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => state.show_answer(),
        KeyCode::Char('n') | KeyCode::Right => state.next_card().await,
        KeyCode::Char('d') | KeyCode::Tab => state.open_deck_picker(),
        KeyCode::Char('N') => state.open_new_deck(),
        KeyCode::Char('a') => state.open_add_card(),
        _ => {}
    }
}

async fn handle_picker_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.mode = Mode::Review,
        KeyCode::Char('j') | KeyCode::Down => state.picker_move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.picker_move_up(),
        KeyCode::Enter => state.pick_deck().await,
        _ => {}
    }
}

async fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_dialog(),
        KeyCode::Enter => {
            if state.mode == Mode::NewDeck {
                state.submit_new_deck().await;
            } else {
                state.submit_add_card().await;
            }
        }
        KeyCode::Tab | KeyCode::BackTab if state.mode == Mode::AddCard => state.toggle_focus(),
        KeyCode::Backspace => {
            if let Some(input) = state.active_input() {
                input.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = state.active_input() {
                input.push(c);
            }
        }
        _ => {}
    }
}
