//! Move list entries for time travel.

use crate::games::tictactoe::{GameSession, MoveRecord};
use derive_new::new;
use serde::Serialize;
use tracing::instrument;

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub description: String,
    /// Highlighted because it was the last jump target.
    pub active: bool,
}

/// Describes the jump to a history record.
///
/// Move numbers are ply counts and do not change with display order.
pub fn move_description(step: usize, record: &MoveRecord) -> String {
    match record.location() {
        Some(location) if step > 0 => format!("Go to move #{}, location{}", step, location),
        _ => "Go to game start".to_string(),
    }
}

/// Entries for every history record, in display order.
#[instrument(skip(session), fields(reversed = session.is_reversed()))]
pub fn move_list(session: &GameSession) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = session
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| {
            MoveEntry::new(step, move_description(step, record), session.is_active(step))
        })
        .collect();
    if session.is_reversed() {
        entries.reverse();
    }
    entries
}
