use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app_state::{Mode, TuiState};
use crate::core::CardView;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(" Card ")
        .borders(Borders::ALL)
        .border_style(if state.mode == Mode::Review {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    // Push the text roughly to the middle of the panel
    let top_padding = area.height.saturating_sub(2 + 5) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();

    match state.session.view() {
        CardView::Prompt(prompt) => {
            lines.push(Line::from(Span::styled(
                prompt.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        CardView::Card {
            term,
            definition,
            total,
        } => {
            lines.push(Line::from(Span::styled(
                term.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(match definition {
                Some(definition) => Line::from(Span::styled(
                    definition.to_string(),
                    Style::default().fg(Color::Green),
                )),
                None => Line::from(""),
            });
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} card(s) in this deck", total),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
