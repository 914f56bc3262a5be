//! Initial snapshot invariant: history starts with the empty board.

use super::super::{Board, GameSession, MoveRecord};
use super::Invariant;

/// Invariant: The first record is an empty board with no location.
///
/// Truncation on branch never removes index 0, so jumping back to the
/// start always shows a fresh game.
pub struct InitialSnapshotInvariant;

impl InitialSnapshotInvariant {
    /// Checks a raw history.
    pub fn history_holds(history: &[MoveRecord]) -> bool {
        history
            .first()
            .is_some_and(|first| *first.board() == Board::new() && first.location().is_none())
    }
}

impl Invariant<GameSession> for InitialSnapshotInvariant {
    fn holds(session: &GameSession) -> bool {
        Self::history_holds(session.history())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no location"
    }
}
