use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let is_active = state.mode == Mode::DeckPicker;

    let block = Block::default()
        .title(" Deck ")
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let deck_name = match state.session.selected_deck() {
        Some(deck) => Span::styled(
            deck.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("(none)", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        Span::raw(" "),
        deck_name,
        Span::styled(
            format!("  ({} decks)", state.session.decks().len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("    "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(": change  "),
        Span::styled("N", Style::default().fg(Color::Yellow)),
        Span::raw(": New Deck  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(": Add Card"),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
