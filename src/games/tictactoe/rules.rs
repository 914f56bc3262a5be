//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage and from
//! the history model so that views and invariants can call them directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_TRIPLES, WinLine, evaluate};

use super::{Board, GameStatus, Mark};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// `turn` is reported as the next mark only when the game is still open.
#[instrument(skip(board))]
pub fn status(board: &Board, turn: Mark) -> GameStatus {
    if let Some(line) = evaluate(board) {
        GameStatus::Won(line)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress { next: turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_in_progress() {
        let board = Board::new();
        assert_eq!(status(&board, Mark::X), GameStatus::InProgress { next: Mark::X });
    }

    #[test]
    fn test_status_won_takes_precedence_over_full() {
        let board: Board = "XXX|OOX|XOO".parse().unwrap();
        assert!(matches!(status(&board, Mark::O), GameStatus::Won(line) if line.winner == Mark::X));
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert_eq!(status(&board, Mark::O), GameStatus::Draw);
    }
}
