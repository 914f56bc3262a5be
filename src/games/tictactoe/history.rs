//! Board snapshots recorded at every ply.

use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Where a move was played, as 1-based column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Location {
    /// Column within the row, 1-3 from the left.
    pub column: u8,
    /// Row, 1-3 from the top.
    pub row: u8,
}

impl From<Position> for Location {
    fn from(pos: Position) -> Self {
        Location::new(pos.column(), pos.row())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// One entry of the history: the board after a ply and where it was played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Full board after this ply.
    board: Board,
    /// Location of the ply; `None` for the initial record.
    location: Option<Location>,
}

impl MoveRecord {
    /// The record every history starts with: an empty board, no location.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Record produced by placing `mark` at `pos` on `previous`.
    pub fn after(previous: &Board, pos: Position, mark: Mark) -> Self {
        Self {
            board: previous.with_mark(pos, mark),
            location: Some(pos.into()),
        }
    }

    /// Position of the ply, if this is not the initial record.
    pub fn position(&self) -> Option<Position> {
        self.location
            .and_then(|loc| Position::from_column_row(loc.column, loc.row))
    }
}

/// Ordered sequence of snapshots; index 0 is always the empty board.
pub type History = Vec<MoveRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_record_is_empty() {
        let record = MoveRecord::initial();
        assert_eq!(record.board(), &Board::new());
        assert_eq!(record.location(), &None);
        assert_eq!(record.position(), None);
    }

    #[test]
    fn test_location_from_every_index() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            let loc = Location::from(*pos);
            assert_eq!(usize::from(loc.column), index % 3 + 1);
            assert_eq!(usize::from(loc.row), index / 3 + 1);
        }
    }

    #[test]
    fn test_record_after_move() {
        let record = MoveRecord::after(&Board::new(), Position::MiddleRight, Mark::X);
        assert_eq!(record.location(), &Some(Location::new(3, 2)));
        assert_eq!(record.position(), Some(Position::MiddleRight));
        assert_eq!(record.board().occupied(), 1);
    }
}
