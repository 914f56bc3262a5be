//! Status line shown above the move list.

use crate::games::tictactoe::GameSession;

/// Label of the move-list order toggle.
pub const REVERSE_LABEL: &str = "Reverse Moves List";

/// "Winner: X", "Draw" or "Next player: O" for the displayed step.
pub fn status_line(session: &GameSession) -> String {
    session.status().to_string()
}
