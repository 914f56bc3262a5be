//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are testable independently and serve as documentation
//! of what the history model guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

pub mod initial_snapshot;
pub mod ply_progression;
pub mod step_in_range;

pub use initial_snapshot::InitialSnapshotInvariant;
pub use ply_progression::PlyProgressionInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    InitialSnapshotInvariant,
    PlyProgressionInvariant,
    StepInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameSession;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new();
        assert!(TimelineInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut session = GameSession::new();
        for index in [4, 0, 8, 2] {
            session.apply_move(index);
        }
        session.jump_to(2);
        session.apply_move(6);
        assert!(TimelineInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new();

        type TwoInvariants = (InitialSnapshotInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
