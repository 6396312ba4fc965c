use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app_state::{Field, Notice, TuiState};

/// A `width` x `height` rect centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn input_line(text: &str, focused: bool) -> Line<'static> {
    if focused {
        Line::from(Span::styled(
            format!(" {}█", text),
            Style::default().bg(Color::Blue).fg(Color::White),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", text),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ))
    }
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn dialog_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

pub fn draw_new_deck(f: &mut Frame, area: Rect, state: &TuiState) {
    let rect = centered_rect(44, 7, area);
    f.render_widget(Clear, rect);

    let lines = vec![
        Line::from("Deck name:"),
        input_line(&state.deck_name_input, true),
        Line::from(""),
        hint("Enter: create  Esc: cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block("New Deck", Color::Cyan))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, rect);
}

pub fn draw_add_card(f: &mut Frame, area: Rect, state: &TuiState) {
    let rect = centered_rect(54, 10, area);
    f.render_widget(Clear, rect);

    let title = match state.session.selected_deck() {
        Some(deck) => format!("Add Card to {}", deck.name),
        None => "Add Card".to_string(),
    };

    let lines = vec![
        Line::from("Term:"),
        input_line(&state.term_input, state.focus == Field::Term),
        Line::from(""),
        Line::from("Definition:"),
        input_line(&state.definition_input, state.focus == Field::Definition),
        Line::from(""),
        hint("Tab: switch field  Enter: save  Esc: cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(&title, Color::Cyan))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, rect);
}

pub fn draw_deck_picker(f: &mut Frame, area: Rect, state: &TuiState) {
    let decks = state.session.decks();
    let height = (decks.len().min(12) as u16) + 2;
    let rect = centered_rect(40, height, area);
    f.render_widget(Clear, rect);

    let items: Vec<ListItem> = decks
        .iter()
        .map(|deck| ListItem::new(deck.name.clone()))
        .collect();

    let list = List::new(items)
        .block(dialog_block("Select Deck", Color::Yellow))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.picker_selected));

    f.render_stateful_widget(list, rect, &mut list_state);
}

pub fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let rect = centered_rect(50, 7, area);
    f.render_widget(Clear, rect);

    let color = if notice.is_error {
        Color::Red
    } else {
        Color::Yellow
    };

    let lines = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        hint("Enter: OK"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(notice.title, color))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, rect);
}
