//! Terminal UI for the time-travel game.
//!
//! The loop is strictly synchronous: read one event, apply one session
//! transition, redraw. Nothing runs between events.

mod app;
mod input;
mod layout;
mod terminal;
mod ui;

pub use app::App;
pub use input::Action;
pub use layout::{HitTarget, ScreenLayout};
pub use ui::draw;

use anyhow::Result;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use terminal::TerminalGuard;

use crate::config::AppConfig;
use crate::games::tictactoe::GameSession;

/// Runs the terminal game until the player quits.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!(mouse = config.mouse(), reversed = config.reversed(), "Starting terminal game");

    let guard = TerminalGuard::enter(*config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut session = GameSession::new();
    if *config.reversed() {
        session.toggle_reversed();
    }
    let mut app = App::new(session);

    let res = run_loop(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    match &res {
        Ok(()) => info!(
            plies = app.session().history().len() - 1,
            status = %app.session().status(),
            "Terminal game finished"
        ),
        Err(err) => error!(error = ?err, "Game loop error"),
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, app);
        })?;

        if *app.should_quit() {
            return Ok(());
        }

        let event = event::read()?;
        app.handle_event(event, area);
    }
}
