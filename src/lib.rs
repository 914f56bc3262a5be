//! Strictly Timeline library - tic-tac-toe with move history
//!
//! A tic-tac-toe game whose every ply is kept as a board snapshot, so the
//! player can jump back to any earlier position and branch from there.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a 3x3 board
//! - **Session**: history of snapshots, current step, list order
//! - **View**: presentation-independent square, move-list and status models
//! - **TUI**: terminal front end driven by mouse clicks or keys
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameSession, Mark, evaluate};
//!
//! let mut session = GameSession::new();
//! for index in [0, 1, 3, 4, 6] {
//!     session.apply_move(index);
//! }
//! let line = evaluate(session.current_board()).unwrap();
//! assert_eq!(line.winner, Mark::X);
//! assert_eq!(line.indices(), [0, 3, 6]);
//!
//! // Jump back and branch: the old future is discarded.
//! session.jump_to(2);
//! session.apply_move(8);
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod games;
mod replay;
mod tui;
pub mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, GameSession, GameStatus, History, Location, Mark, MoveRecord,
    Position, SessionError, Square, WINNING_TRIPLES, WinLine, evaluate, is_draw, is_full,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    InitialSnapshotInvariant, Invariant, InvariantSet, InvariantViolation,
    PlyProgressionInvariant, StepInRangeInvariant, TimelineInvariants,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::status;

// Crate-level exports - Replay
pub use replay::{ReplayReport, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, HitTarget, ScreenLayout, draw, run_tui};
