use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let enabled = state.session.can_review();
    let button = |key: &'static str, label: &'static str, on: bool| -> Vec<Span<'static>> {
        let (key_style, label_style) = if on {
            (
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };
        vec![
            Span::styled(format!(" [{}] ", key), key_style),
            Span::styled(label, label_style),
            Span::raw("  "),
        ]
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(inner);

    let mut left = button("Space", "Show Answer", enabled);
    left.extend(button("n", "Next", enabled));
    f.render_widget(Paragraph::new(Line::from(left)), halves[0]);

    let quit = Paragraph::new(Line::from(button("q", "Quit", true))).alignment(Alignment::Right);
    f.render_widget(quit, halves[1]);
}
