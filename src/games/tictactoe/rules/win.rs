//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const WINNING_TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// Mark occupying all three squares.
    pub winner: Mark,
    /// The winning triple, in [`WINNING_TRIPLES`] order.
    pub triple: [Position; 3],
}

impl WinLine {
    /// Board indices of the winning triple.
    pub fn indices(&self) -> [usize; 3] {
        self.triple.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.triple.contains(&pos)
    }
}

/// Checks if there is a completed line on the board.
///
/// Lines are checked in [`WINNING_TRIPLES`] order and the first match is
/// returned, so boards with more than one line (impossible in legal play)
/// still give a deterministic answer.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinLine> {
    WINNING_TRIPLES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinLine {
                winner: mark,
                triple: [a, b, c],
            })
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_triple_is_detected() {
        for triple in WINNING_TRIPLES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for pos in triple {
                    board.set(pos, Square::Occupied(mark));
                }
                let line = evaluate(&board).expect("line should win");
                assert_eq!(line.winner, mark);
                assert_eq!(line.triple, triple);
            }
        }
    }

    #[test]
    fn test_winner_with_other_marks_present() {
        let board: Board = "XO.|XO.|X..".parse().unwrap();
        let line = evaluate(&board).unwrap();
        assert_eq!(line.winner, Mark::X);
        assert_eq!(line.indices(), [0, 3, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX|...|...".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_invalid_board() {
        // Two complete rows cannot happen in legal play; the top row is checked first.
        let board: Board = "OOO|XXX|...".parse().unwrap();
        let line = evaluate(&board).unwrap();
        assert_eq!(line.winner, Mark::O);
        assert_eq!(line.indices(), [0, 1, 2]);
    }
}
