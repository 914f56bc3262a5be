//! Game session: history of snapshots with time travel.
//!
//! The session owns the whole game state for the lifetime of a front end.
//! Every operation is a synchronous transition; rejected inputs (occupied
//! squares, moves after a win, jumps past the end) leave the state
//! untouched and are only reported through tracing at debug level.

use super::history::{History, MoveRecord};
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::rules::{self, WinLine};
use super::{Board, GameStatus, Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game with its move history.
///
/// Deserializing checks [`TimelineInvariants`], so a stored session can
/// never point past its history or carry a broken snapshot chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionParts")]
pub struct GameSession {
    history: History,
    current_step: usize,
    reversed: bool,
    active_step: Option<usize>,
}

/// Raw session fields as read from storage, before validation.
#[derive(Deserialize)]
struct SessionParts {
    history: History,
    current_step: usize,
    reversed: bool,
    active_step: Option<usize>,
}

/// Error restoring a session that violates the timeline invariants.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid session: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// Violated invariants, joined.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl TryFrom<SessionParts> for GameSession {
    type Error = SessionError;

    fn try_from(parts: SessionParts) -> Result<Self, Self::Error> {
        let session = Self {
            history: parts.history,
            current_step: parts.current_step,
            reversed: parts.reversed,
            active_step: parts.active_step,
        };
        TimelineInvariants::check_all(&session)
            .map_err(|violations| SessionError::new(join_violations(&violations)))?;
        Ok(session)
    }
}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl GameSession {
    /// Creates a session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            current_step: 0,
            reversed: false,
            active_step: None,
        }
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// All recorded snapshots, including any beyond the current step.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Mark to play next, derived from the current step's parity.
    pub fn turn(&self) -> Mark {
        Mark::for_ply(self.current_step)
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Step highlighted in the move list, set by the last jump.
    pub fn active_step(&self) -> Option<usize> {
        self.active_step
    }

    /// Returns true if `step` is the highlighted move-list entry.
    pub fn is_active(&self, step: usize) -> bool {
        self.active_step == Some(step)
    }

    /// Winning line on the current board, if any.
    pub fn outcome(&self) -> Option<WinLine> {
        rules::evaluate(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.current_board(), self.turn())
    }

    /// Plays the current turn's mark on square `index` (0-8).
    ///
    /// Ignored when the current board is already won, when the square is
    /// taken, or when `index` is off the board. Otherwise any snapshots
    /// after the current step are discarded before the new one is appended.
    #[instrument(skip(self), fields(step = self.current_step, turn = %self.turn()))]
    pub fn apply_move(&mut self, index: usize) {
        let Some(pos) = Position::from_index(index) else {
            debug!(index, "Ignoring move off the board");
            return;
        };
        if let Some(line) = self.outcome() {
            debug!(winner = %line.winner, "Ignoring move after game end");
            return;
        }
        if !self.current_board().is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied square");
            return;
        }

        let mark = self.turn();
        let dropped = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        let record = MoveRecord::after(self.current_board(), pos, mark);
        self.history.push(record);
        self.current_step = self.history.len() - 1;
        self.active_step = None;

        debug!(
            position = %pos,
            %mark,
            dropped,
            step = self.current_step,
            "Move applied"
        );
        self.debug_check_invariants();
    }

    /// Moves the current step to `step` without touching any snapshot.
    ///
    /// Ignored when `step` is past the end of the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!("Ignoring jump past end of history");
            return;
        }
        self.current_step = step;
        self.active_step = Some(step);
        debug!(turn = %self.turn(), "Jumped");
        self.debug_check_invariants();
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_reversed(&mut self) {
        self.reversed = !self.reversed;
        debug!(reversed = self.reversed, "Move list order toggled");
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = TimelineInvariants::check_all(self) {
            panic!("Timeline invariant violated: {}", join_violations(&violations));
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &index in moves {
            session.apply_move(index);
        }
        session
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.turn(), Mark::X);
        assert!(!session.is_reversed());
        assert_eq!(session.active_step(), None);
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let session = play(&[4]);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.turn(), Mark::O);
        assert_eq!(
            session.current_board().get(Position::Center),
            crate::games::tictactoe::Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_off_board_index_ignored() {
        let mut session = play(&[0]);
        let before = session.clone();
        session.apply_move(9);
        assert_eq!(session, before);
    }

    #[test]
    fn test_jump_then_move_discards_future() {
        let mut session = play(&[0, 1, 2, 3]);
        session.jump_to(1);
        assert_eq!(session.history().len(), 5);
        session.apply_move(8);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current_step(), 2);
        assert_eq!(session.history()[2].position(), Some(Position::BottomRight));
    }

    #[test]
    fn test_jump_sets_active_and_move_clears_it() {
        let mut session = play(&[0, 1]);
        session.jump_to(1);
        assert!(session.is_active(1));
        assert!(!session.is_active(2));
        session.apply_move(5);
        assert_eq!(session.active_step(), None);
    }

    #[test]
    fn test_serde_round_trip_keeps_session() {
        let mut session = play(&[4, 0, 8]);
        session.jump_to(1);
        session.toggle_reversed();
        let json = serde_json::to_string(&session).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut value = serde_json::to_value(GameSession::new()).unwrap();
        value["current_step"] = serde_json::json!(5);
        let result = serde_json::from_value::<GameSession>(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_broken_history() {
        let mut value = serde_json::to_value(play(&[0, 1])).unwrap();
        let repeated = value["history"][1].clone();
        value["history"][2] = repeated;
        let err = serde_json::from_value::<GameSession>(value).unwrap_err();
        assert!(err.to_string().contains("Invalid session"));
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = r#"{"history":[],"current_step":0,"reversed":false,"active_step":null}"#;
        assert!(serde_json::from_str::<GameSession>(json).is_err());
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut session = play(&[0, 1]);
        let before = session.clone();
        session.jump_to(3);
        assert_eq!(session, before);
    }
}
