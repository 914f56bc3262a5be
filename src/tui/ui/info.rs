//! Game info panel: status, order toggle and move list.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::GameSession;
use crate::tui::layout::ScreenLayout;
use crate::view::{REVERSE_LABEL, move_list, status_line};

/// Renders the info panel next to the board.
pub fn render_info(frame: &mut Frame, layout: &ScreenLayout, session: &GameSession) {
    let block = Block::default().title("Game Info").borders(Borders::ALL);
    frame.render_widget(block, layout.info);

    let status_style = if session.status().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(status_line(session)).style(status_style),
        layout.status,
    );

    let order = if session.is_reversed() { "newest first" } else { "oldest first" };
    frame.render_widget(
        Paragraph::new(format!("[ {} ] ({})", REVERSE_LABEL, order))
            .style(Style::default().fg(Color::Cyan)),
        layout.toggle,
    );

    let lines: Vec<Line> = move_list(session)
        .into_iter()
        .map(|entry| {
            let style = if entry.active {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(entry.description, style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.moves);
}
