//! Application state and logic.

use crossterm::event::Event;
use derive_getters::Getters;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use crate::games::tictactoe::{GameSession, Position};
use crate::view;

use super::input::{Action, key_action, mouse_action};
use super::layout::ScreenLayout;

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Handles one terminal event against the layout drawn in `area`.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event, area: Rect) {
        let action = match event {
            Event::Key(key) => key_action(key, self.cursor),
            Event::Mouse(mouse) => mouse_action(mouse, &ScreenLayout::compute(area)),
            _ => None,
        };
        if let Some(action) = action {
            self.apply(action);
        }
    }

    /// Applies an action to the session.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, step = self.session.current_step(), "Applying action");
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.session.apply_move(pos.to_index());
            }
            Action::PlayAtCursor => self.session.apply_move(self.cursor.to_index()),
            Action::Cursor(pos) => self.cursor = pos,
            Action::JumpToLine(line) => {
                if let Some(entry) = view::move_list(&self.session).get(line) {
                    self.session.jump_to(entry.step);
                }
            }
            Action::StepBack => {
                if let Some(step) = self.session.current_step().checked_sub(1) {
                    self.session.jump_to(step);
                }
            }
            Action::StepForward => self.session.jump_to(self.session.current_step() + 1),
            Action::ToggleOrder => self.session.toggle_reversed(),
            Action::Quit => self.should_quit = true,
        }
    }
}
