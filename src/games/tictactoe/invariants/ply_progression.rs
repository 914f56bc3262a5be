//! Ply progression invariant: each snapshot adds exactly one mark.

use super::super::{GameSession, Mark, MoveRecord, Square};
use super::Invariant;

/// Invariant: Consecutive snapshots differ by one newly placed mark.
///
/// For every record after the first, exactly one square changed from
/// empty to a mark, marks alternate X, O, X, ... starting at record 1,
/// and the recorded location is the changed square.
pub struct PlyProgressionInvariant;

impl PlyProgressionInvariant {
    /// Checks a raw history.
    pub fn history_holds(history: &[MoveRecord]) -> bool {
        history.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let changed = before.board().diff(after.board());
            let [pos] = changed.as_slice() else {
                return false;
            };
            let expected = Square::Occupied(Mark::for_ply(i));
            before.board().is_empty(*pos)
                && after.board().get(*pos) == expected
                && after.position() == Some(*pos)
        })
    }
}

impl Invariant<GameSession> for PlyProgressionInvariant {
    fn holds(session: &GameSession) -> bool {
        Self::history_holds(session.history())
    }

    fn description() -> &'static str {
        "Each snapshot adds one alternating mark at its recorded location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_played_session_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 8, 2, 6] {
            session.apply_move(index);
        }
        assert!(PlyProgressionInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_first_mark_violates() {
        let history = vec![
            MoveRecord::initial(),
            MoveRecord::after(&Board::new(), Position::Center, Mark::O),
        ];
        assert!(!PlyProgressionInvariant::history_holds(&history));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let first = MoveRecord::after(&Board::new(), Position::TopLeft, Mark::X);
        let second = MoveRecord::after(first.board(), Position::Center, Mark::X);
        let history = vec![MoveRecord::initial(), first, second];
        assert!(!PlyProgressionInvariant::history_holds(&history));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let first = MoveRecord::after(&Board::new(), Position::TopLeft, Mark::X);
        let second = MoveRecord::after(first.board(), Position::Center, Mark::O);
        let history = vec![MoveRecord::initial(), second];
        assert!(!PlyProgressionInvariant::history_holds(&history));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = MoveRecord::after(&Board::new(), Position::TopLeft, Mark::X);
        let second = MoveRecord::after(first.board(), Position::TopLeft, Mark::O);
        let history = vec![MoveRecord::initial(), first, second];
        assert!(!PlyProgressionInvariant::history_holds(&history));
    }
}
