//! Step range invariant: the session never points past its history.

use super::super::GameSession;
use super::Invariant;

/// Invariant: The current step and the highlighted step index into history.
pub struct StepInRangeInvariant;

impl Invariant<GameSession> for StepInRangeInvariant {
    fn holds(session: &GameSession) -> bool {
        let len = session.history().len();
        session.current_step() < len && session.active_step().is_none_or(|step| step < len)
    }

    fn description() -> &'static str {
        "Current and highlighted steps are within history"
    }
}
