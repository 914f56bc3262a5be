//! Stateless UI rendering for the time-travel game.

mod board;
mod info;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::app::App;
use super::layout::ScreenLayout;

pub use board::render_board;
pub use info::render_info;

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(frame.area());

    let title = Paragraph::new("Strictly Games - Tic Tac Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    render_board(frame, &layout, app.session(), *app.cursor());
    render_info(frame, &layout, app.session());

    let help = Paragraph::new(
        "click/arrows+Enter/1-9: play  [ ]: step  r: reverse list  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}
