//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::games::tictactoe::Position;

use super::layout::{HitTarget, ScreenLayout};

/// A user intent, independent of how it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the next mark on a square.
    Play(Position),
    /// Place the next mark under the cursor.
    PlayAtCursor,
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Jump to the move-list line at this offset from the top.
    JumpToLine(usize),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Flip the move-list order.
    ToggleOrder,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match key {
        KeyCode::Left => (column.saturating_sub(1).max(1), row),
        KeyCode::Right => ((column + 1).min(3), row),
        KeyCode::Up => (column, row.saturating_sub(1).max(1)),
        KeyCode::Down => (column, (row + 1).min(3)),
        _ => (column, row),
    };
    Position::from_column_row(column, row).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::ToggleOrder),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Play),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::Cursor(move_cursor(cursor, key.code)))
        }
        _ => None,
    }
}

/// Maps a left click to an action through the rendered layout.
pub fn mouse_action(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match layout.hit(mouse.column, mouse.row)? {
        HitTarget::Square(pos) => Some(Action::Play(pos)),
        HitTarget::MoveLine(line) => Some(Action::JumpToLine(line)),
        HitTarget::ReverseToggle => Some(Action::ToggleOrder),
    }
}
