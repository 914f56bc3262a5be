//! Presentation-independent view models.
//!
//! Every function here is a pure read of a [`GameSession`]. Front ends
//! render the returned values and route user input back to the session;
//! they never inspect the history themselves.
//!
//! [`GameSession`]: crate::GameSession

mod board;
mod moves;
mod status;

pub use board::{SquareView, board_view};
pub use moves::{MoveEntry, move_description, move_list};
pub use status::{REVERSE_LABEL, status_line};
