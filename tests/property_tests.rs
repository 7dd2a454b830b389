//! Property-based tests for the balance game.
//!
//! These tests use proptest to drive games with random move sequences
//! and check the invariants that must hold after every move.

use number_balance::{
    Action, BalanceConfig, BalanceGame, Completion, GamePhase, Operator, Side, Value, Verdict,
};
use proptest::prelude::*;

/// A move expressed by position, so it stays meaningful for any deal.
#[derive(Clone, Debug)]
enum Move {
    Select(Side, usize),
    Operator(Operator),
    Commit(Side),
    Undo(Side, usize),
    Check,
    Dismiss,
}

fn arbitrary_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        4 => (arbitrary_side(), 0..8usize).prop_map(|(s, i)| Move::Select(s, i)),
        2 => arbitrary_operator().prop_map(Move::Operator),
        2 => arbitrary_side().prop_map(Move::Commit),
        1 => (arbitrary_side(), 0..4usize).prop_map(|(s, i)| Move::Undo(s, i)),
        1 => Just(Move::Check),
        1 => Just(Move::Dismiss),
    ]
}

/// Translate a positional move into an action, if it names something live.
fn to_action(game: &BalanceGame, mv: &Move) -> Option<Action> {
    Some(match *mv {
        Move::Select(side, i) => Action::Select {
            side,
            token: game.pool(side).get(i)?.id,
        },
        Move::Operator(op) => Action::ChooseOperator(op),
        Move::Commit(side) => Action::Commit(side),
        Move::Undo(side, i) => Action::Undo {
            side,
            operation: game.operations(side).get(i)?.id,
        },
        Move::Check => Action::CheckBalance,
        Move::Dismiss => Action::DismissResult,
    })
}

fn play_out(seed: u64, moves: &[Move]) -> BalanceGame {
    let mut game = BalanceGame::new(BalanceConfig::new().with_seed(seed));
    for mv in moves {
        if let Some(action) = to_action(&game, mv) {
            // Division by zero cannot happen with values in 1..=9, but an
            // error must leave the game usable either way.
            let _ = game.apply_action(&action);
        }
    }
    game
}

proptest! {
    #[test]
    fn tokens_are_conserved(seed in any::<u64>(), moves in prop::collection::vec(arbitrary_move(), 0..60)) {
        let game = play_out(seed, &moves);
        for side in Side::ALL {
            let live = game.pool(side).len();
            let played = game.operations(side).len();
            prop_assert_eq!(live + 2 * played, 6);
        }
    }

    #[test]
    fn total_is_sum_of_results(seed in any::<u64>(), moves in prop::collection::vec(arbitrary_move(), 0..60)) {
        let game = play_out(seed, &moves);
        for side in Side::ALL {
            let sum = Value::checked_sum(game.operations(side).iter().map(|op| op.result));
            prop_assert_eq!(Some(game.total(side)), sum);
        }
    }

    #[test]
    fn selection_holds_only_live_tokens(seed in any::<u64>(), moves in prop::collection::vec(arbitrary_move(), 0..60)) {
        let game = play_out(seed, &moves);
        let selection = game.selection();
        let side = selection.active_side();
        for id in selection.held_ids() {
            prop_assert!(game.pool(side).iter().any(|t| t.id == id));
        }
    }

    #[test]
    fn commit_then_undo_restores_pool_size(seed in any::<u64>(), side in arbitrary_side(), op in arbitrary_operator()) {
        let mut game = BalanceGame::new(BalanceConfig::new().with_seed(seed));
        let a = game.pool(side)[0].id;
        let b = game.pool(side)[1].id;
        game.select(side, a);
        game.select(side, b);
        game.choose_operator(op);

        let id = game.commit(side).unwrap().unwrap();
        prop_assert_eq!(game.pool(side).len(), 4);

        let restored = game.undo(side, id).unwrap().unwrap();
        prop_assert_eq!(restored.len(), 2);
        prop_assert_eq!(game.pool(side).len(), 6);
        prop_assert_eq!(game.total(side), Value::ZERO);
    }

    #[test]
    fn check_is_balanced_iff_totals_equal(seed in any::<u64>(), moves in prop::collection::vec(arbitrary_move(), 0..60)) {
        let mut game = play_out(seed, &moves);
        let equal = game.total(Side::Left) == game.total(Side::Right);
        let check = game.check_balance();

        prop_assert_eq!(check.verdict == Verdict::Balanced, equal);
        let expected = if equal {
            GamePhase::Complete(Completion::Balanced)
        } else {
            GamePhase::Unbalanced
        };
        prop_assert_eq!(game.phase(), expected);
    }

    #[test]
    fn reset_deals_default_range(seed in any::<u64>(), moves in prop::collection::vec(arbitrary_move(), 0..30)) {
        let mut game = play_out(seed, &moves);
        game.reset();

        prop_assert_eq!(game.phase(), GamePhase::Idle);
        for side in Side::ALL {
            prop_assert_eq!(game.pool(side).len(), 6);
            prop_assert!(game.pool(side).iter().all(|t| (1..=9).contains(&t.value)));
            prop_assert!(game.operations(side).is_empty());
        }
    }
}
