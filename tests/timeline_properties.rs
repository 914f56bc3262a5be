//! Property tests for the game session.

use proptest::prelude::*;
use strictly_timeline::{GameSession, InvariantSet, Mark, TimelineInvariants};

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(usize),
    Jump(usize),
    Toggle,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..11).prop_map(Op::Move),
        2 => (0usize..12).prop_map(Op::Jump),
        1 => Just(Op::Toggle),
    ]
}

fn run(ops: &[Op]) -> GameSession {
    let mut session = GameSession::new();
    for op in ops {
        match *op {
            Op::Move(index) => session.apply_move(index),
            Op::Jump(step) => session.jump_to(step),
            Op::Toggle => session.toggle_reversed(),
        }
    }
    session
}

proptest! {
    #[test]
    fn invariants_hold_for_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let session = run(&ops);
        prop_assert!(TimelineInvariants::check_all(&session).is_ok());
        prop_assert!(session.current_step() < session.history().len());
        let expected = if session.current_step() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(session.turn(), expected);
    }

    #[test]
    fn rejected_move_changes_nothing(ops in prop::collection::vec(op_strategy(), 0..30), index in 0usize..9) {
        let mut session = run(&ops);
        let occupied = !session.current_board().is_empty(
            strictly_timeline::Position::from_index(index).unwrap(),
        );
        let won = session.outcome().is_some();
        let before = session.clone();

        session.apply_move(index);

        if occupied || won {
            prop_assert_eq!(session, before);
        } else {
            prop_assert_eq!(session.current_step(), before.current_step() + 1);
            prop_assert_eq!(session.history().len(), before.current_step() + 2);
        }
    }

    #[test]
    fn toggle_never_touches_game_state(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut session = run(&ops);
        let before = session.clone();

        session.toggle_reversed();
        prop_assert_eq!(session.history(), before.history());
        prop_assert_eq!(session.current_step(), before.current_step());
        prop_assert_ne!(session.is_reversed(), before.is_reversed());

        session.toggle_reversed();
        prop_assert_eq!(session, before);
    }
}
