//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// X (always moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark to move at the given ply count.
    ///
    /// Turns strictly alternate starting with X, so even plies belong to X.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares.
    ///
    /// No consistency is enforced: boards with impossible mark counts are
    /// accepted so rule functions can be exercised on them.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.set(pos, Square::Occupied(mark));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Positions whose squares differ between two boards.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
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

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks; `.`, `_`, `-` and spaces are empty.
    /// Row separators (`|`, `/`, newlines) are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                '|' | '/' | '\n' | '\r' => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character {:?}",
                        other
                    )));
                }
            };
            if count == 9 {
                return Err(BoardParseError::new("More than 9 cells"));
            }
            squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::new(format!(
                "Expected 9 cells, found {}",
                count
            )));
        }
        Ok(Board::from_squares(squares))
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Mark to play next.
        next: Mark,
    },
    /// A mark completed a line.
    Won(super::rules::WinLine),
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(line) => write!(f, "Winner: {}", line.winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_ply_alternates() {
        assert_eq!(Mark::for_ply(0), Mark::X);
        assert_eq!(Mark::for_ply(1), Mark::O);
        assert_eq!(Mark::for_ply(8), Mark::X);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO.|XO.|X..".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
        assert!(board.is_empty(Position::BottomRight));
        assert_eq!(board.occupied(), 5);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
        assert!("XOXOXOXOZ".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_diff_reports_changed_squares() {
        let before = Board::new();
        let after = before.with_mark(Position::TopRight, Mark::O);
        assert_eq!(before.diff(&after), vec![Position::TopRight]);
        assert!(after.diff(&after).is_empty());
    }
}
