//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{GameSession, Mark, Position};
use crate::tui::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use crate::view::{SquareView, board_view};

/// Renders the board panel: grid lines, marks, win highlight and cursor.
pub fn render_board(frame: &mut Frame, layout: &ScreenLayout, session: &GameSession, cursor: Position) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    frame.render_widget(block, layout.board);

    frame.render_widget(
        Paragraph::new(grid_lines()).style(Style::default().fg(Color::DarkGray)),
        layout.grid,
    );

    for (square, area) in board_view(session).iter().zip(layout.cells) {
        render_square(frame, area, square, square.position == cursor);
    }
}

fn grid_lines() -> Vec<Line<'static>> {
    let blank = " ".repeat(usize::from(CELL_WIDTH));
    let rule = "─".repeat(usize::from(CELL_WIDTH));
    let cell_row = format!("{blank}│{blank}│{blank}");
    let separator = format!("{rule}┼{rule}┼{rule}");

    let mut lines = Vec::new();
    for row in 0..3 {
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::from(cell_row.clone()));
        }
        if row < 2 {
            lines.push(Line::from(separator.clone()));
        }
    }
    lines
}

fn render_square(frame: &mut Frame, area: Rect, square: &SquareView, under_cursor: bool) {
    let mut style = match square.mark {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if square.highlighted {
        style = style.bg(Color::Yellow).fg(Color::Black);
    } else if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    if square.highlighted && under_cursor {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let text = vec![Line::from(""), Line::from(square.label()), Line::from("")];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
