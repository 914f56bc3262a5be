//! Board squares with win highlighting.

use crate::games::tictactoe::{GameSession, Mark, Position};
use serde::Serialize;
use tracing::instrument;

/// What a single square should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareView {
    /// Which square this is.
    pub position: Position,
    /// Mark on the square, if any.
    pub mark: Option<Mark>,
    /// Part of the winning line on the displayed board.
    pub highlighted: bool,
}

impl SquareView {
    /// Text for the square: the mark, or nothing.
    pub fn label(&self) -> &'static str {
        match self.mark {
            Some(Mark::X) => "X",
            Some(Mark::O) => "O",
            None => "",
        }
    }
}

/// Squares of the current board in index order.
#[instrument(skip(session), fields(step = session.current_step()))]
pub fn board_view(session: &GameSession) -> [SquareView; 9] {
    let board = session.current_board();
    let line = session.outcome();
    Position::ALL.map(|position| SquareView {
        position,
        mark: board.get(position).mark(),
        highlighted: line.is_some_and(|line| line.contains(position)),
    })
}
