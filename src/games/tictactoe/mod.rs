//! Tic-tac-toe rules and the time-travelling game session.

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use history::{History, Location, MoveRecord};
pub use position::Position;
pub use rules::{WINNING_TRIPLES, WinLine, evaluate, is_draw, is_full};
pub use session::{GameSession, SessionError};
pub use types::{Board, BoardParseError, GameStatus, Mark, Square};
