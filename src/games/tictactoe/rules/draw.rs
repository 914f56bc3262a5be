//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw.
///
/// A full board can still contain a winning line, so the win check runs
/// first and a won board is never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}
