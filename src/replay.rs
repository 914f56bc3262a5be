//! Headless replay of a move sequence.
//!
//! Moves go through [`GameSession::apply_move`] exactly like clicks do, so
//! illegal entries are ignored rather than reported.

use serde::Serialize;
use tracing::{info, instrument};

use crate::games::tictactoe::{Board, GameSession, GameStatus, Mark};
use crate::view::{MoveEntry, move_list};

/// Result of a replay, ready for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Board at the current step.
    pub board: Board,
    /// Current step index.
    pub current_step: usize,
    /// Mark to play next.
    pub turn: Mark,
    /// Status of the displayed board.
    pub status: GameStatus,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

/// Plays `moves` from an empty board, then optionally jumps to `jump`.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, reversed: bool) -> GameSession {
    let mut session = GameSession::new();
    for &index in moves {
        session.apply_move(index);
    }
    if let Some(step) = jump {
        session.jump_to(step);
    }
    if reversed {
        session.toggle_reversed();
    }
    info!(
        requested = moves.len(),
        recorded = session.history().len() - 1,
        step = session.current_step(),
        "Replay finished"
    );
    session
}

impl ReplayReport {
    /// Captures the displayed state of a session.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            board: *session.current_board(),
            current_step: session.current_step(),
            turn: session.turn(),
            status: session.status(),
            moves: move_list(session),
        }
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for entry in &self.moves {
            let marker = if entry.step == self.current_step { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, entry.description)?;
        }
        Ok(())
    }
}
