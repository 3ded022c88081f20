use crate::dominance::{
    Comparison, dominates_action, dominates_strategy, is_action_dominated, is_strategy_dominated,
};
use crate::game::{ActionId, ExtensiveGame, InvalidArgument, NormalGame, StrategyId};
use crate::support::{BehaviorSupport, StrategySupport};
use crate::test_utils::example_games::{
    nested_game, row_dominant_game, single_decision_game, two_stage_game,
};
use crate::test_utils::{int, payoffs};
use std::sync::Arc;

const OUT: ActionId = ActionId {
    player: 0,
    infoset: 0,
    action: 0,
};
const IN: ActionId = ActionId {
    player: 0,
    infoset: 0,
    action: 1,
};
const FIGHT: ActionId = ActionId {
    player: 1,
    infoset: 0,
    action: 0,
};
const YIELD: ActionId = ActionId {
    player: 1,
    infoset: 0,
    action: 1,
};

#[test]
fn comparison_weak_needs_one_strict_improvement() {
    let mut weak = Comparison::new(false);
    assert!(weak.record(&int(1), &int(1)));
    assert!(!weak.verdict());
    assert!(weak.record(&int(2), &int(1)));
    assert!(weak.verdict());
    assert!(!weak.record(&int(0), &int(1)));

    let mut strong = Comparison::new(true);
    assert!(!strong.record(&int(1), &int(1)));
    assert!(strong.record(&int(2), &int(1)));
    assert!(strong.verdict());
}

#[test]
fn single_decision_domination() {
    let game = single_decision_game(3, 1);
    let support = BehaviorSupport::full(&game);
    let (a1, a2) = (ActionId::new(0, 0, 0), ActionId::new(0, 0, 1));
    for conditional in [true, false] {
        assert_eq!(dominates_action(&support, a1, a2, true, conditional), Ok(true));
        assert_eq!(dominates_action(&support, a2, a1, false, conditional), Ok(false));
        assert_eq!(is_action_dominated(&support, a2, true, conditional), Ok(true));
        assert_eq!(is_action_dominated(&support, a1, false, conditional), Ok(false));
    }

    // Equal payoffs are never a domination, not even a weak one.
    let tie = single_decision_game(2, 2);
    let support = BehaviorSupport::full(&tie);
    assert_eq!(dominates_action(&support, a1, a2, false, true), Ok(false));
    assert_eq!(dominates_action(&support, a1, a2, true, true), Ok(false));
}

#[test]
fn conditional_comparison_ignores_other_branches() {
    let game = two_stage_game();
    let support = BehaviorSupport::full(&game);

    // Bob prefers Yield at both of his nodes...
    assert_eq!(dominates_action(&support, YIELD, FIGHT, true, true), Ok(true));
    // ...but when Alice plays Out, both pay him the same.
    assert_eq!(dominates_action(&support, YIELD, FIGHT, true, false), Ok(false));
    assert_eq!(dominates_action(&support, YIELD, FIGHT, false, false), Ok(true));
    assert_eq!(dominates_action(&support, FIGHT, YIELD, false, false), Ok(false));
}

#[test]
fn domination_depends_on_the_support() {
    let game = two_stage_game();
    let full = BehaviorSupport::full(&game);
    for (a, b) in [(OUT, IN), (IN, OUT)] {
        assert_eq!(dominates_action(&full, a, b, false, true), Ok(false));
        assert_eq!(dominates_action(&full, a, b, false, false), Ok(false));
    }

    let mut only_yield = full.clone();
    only_yield.remove_action(FIGHT).unwrap();
    assert_eq!(dominates_action(&only_yield, IN, OUT, true, true), Ok(true));
    assert_eq!(dominates_action(&only_yield, IN, OUT, true, false), Ok(true));

    let mut only_fight = full.clone();
    only_fight.remove_action(YIELD).unwrap();
    assert_eq!(dominates_action(&only_fight, OUT, IN, true, true), Ok(true));
    assert_eq!(is_action_dominated(&only_fight, IN, true, false), Ok(true));
}

#[test]
fn compared_actions_need_not_be_supported() {
    let game = two_stage_game();
    let mut support = BehaviorSupport::full(&game);
    support.remove_action(OUT).unwrap();
    support.remove_action(FIGHT).unwrap();
    assert_eq!(dominates_action(&support, IN, OUT, true, true), Ok(true));
    // `OUT` is not in the support, so it cannot dominate anything there.
    assert_eq!(is_action_dominated(&support, IN, false, true), Ok(false));
}

#[test]
fn unreachable_infoset_uses_all_members() {
    let game = nested_game();
    let mut support = BehaviorSupport::full(&game);
    support.remove_action(ActionId::new(0, 0, 0)).unwrap();
    let (l, r) = (ActionId::new(1, 0, 0), ActionId::new(1, 0, 1));
    // Bob is not reached, but his own payoffs still favour `l`.
    assert_eq!(dominates_action(&support, l, r, true, true), Ok(true));
    // Unconditionally, play never reaches Bob, so nothing separates the two.
    assert_eq!(dominates_action(&support, l, r, false, false), Ok(false));
}

#[test]
fn action_arguments_are_validated() {
    let game = two_stage_game();
    let support = BehaviorSupport::full(&game);
    assert_eq!(
        dominates_action(&support, OUT, FIGHT, true, true),
        Err(InvalidArgument::DifferentInfosets(OUT, FIGHT))
    );
    let bogus = ActionId::new(0, 0, 2);
    assert_eq!(
        dominates_action(&support, OUT, bogus, true, true),
        Err(InvalidArgument::UnknownAction(bogus))
    );
    assert_eq!(
        is_action_dominated(&support, bogus, true, true),
        Err(InvalidArgument::UnknownAction(bogus))
    );
}

#[test]
fn strategy_domination_in_row_dominant_game() {
    let game = row_dominant_game();
    let full = StrategySupport::full(&game);
    let (r1, r2) = (StrategyId::new(0, 0), StrategyId::new(0, 1));
    let (c1, c2) = (StrategyId::new(1, 0), StrategyId::new(1, 1));

    assert_eq!(dominates_strategy(&full, r1, r2, true), Ok(true));
    assert_eq!(dominates_strategy(&full, r2, r1, false), Ok(false));
    assert_eq!(is_strategy_dominated(&full, r2, true), Ok(true));
    assert_eq!(dominates_strategy(&full, c1, c2, false), Ok(false));
    assert_eq!(dominates_strategy(&full, c2, c1, false), Ok(false));

    let mut reduced = full.clone();
    reduced.remove_strategy(r2).unwrap();
    assert_eq!(dominates_strategy(&reduced, c1, c2, true), Ok(true));
    assert_eq!(is_strategy_dominated(&reduced, c2, true), Ok(true));
    assert_eq!(is_strategy_dominated(&reduced, c1, false), Ok(false));
}

#[test]
fn weak_strategy_domination() {
    let mut game = NormalGame::new(&["Row", "Column"], &[2, 2]).unwrap();
    game.set_outcome(&[0, 0], payoffs(&[1, 0])).unwrap();
    game.set_outcome(&[0, 1], payoffs(&[2, 0])).unwrap();
    game.set_outcome(&[1, 0], payoffs(&[1, 0])).unwrap();
    // Profile (1, 1) has no outcome and pays zero.
    let game = Arc::new(game);
    let support = StrategySupport::full(&game);
    let (r1, r2) = (StrategyId::new(0, 0), StrategyId::new(0, 1));

    assert_eq!(dominates_strategy(&support, r1, r2, false), Ok(true));
    assert_eq!(dominates_strategy(&support, r1, r2, true), Ok(false));
    // The column player is indifferent everywhere.
    let (c1, c2) = (StrategyId::new(1, 0), StrategyId::new(1, 1));
    assert_eq!(dominates_strategy(&support, c1, c2, false), Ok(false));
}

#[test]
fn strategy_arguments_are_validated() {
    let game = row_dominant_game();
    let support = StrategySupport::full(&game);
    let (r1, c1) = (StrategyId::new(0, 0), StrategyId::new(1, 0));
    assert_eq!(
        dominates_strategy(&support, r1, c1, true),
        Err(InvalidArgument::DifferentPlayers(r1, c1))
    );
    let bogus = StrategyId::new(2, 0);
    assert_eq!(
        is_strategy_dominated(&support, bogus, true),
        Err(InvalidArgument::UnknownStrategy(bogus))
    );
}

#[test]
fn strong_domination_is_irreflexive_and_asymmetric() {
    for game in [two_stage_game(), nested_game()] {
        let support = BehaviorSupport::full(&game);
        for infoset in game.infosets() {
            let actions: Vec<ActionId> = support.actions(infoset).collect();
            for a in &actions {
                for conditional in [true, false] {
                    assert_eq!(dominates_action(&support, *a, *a, true, conditional), Ok(false));
                    assert_eq!(dominates_action(&support, *a, *a, false, conditional), Ok(false));
                    for b in &actions {
                        let ab = dominates_action(&support, *a, *b, true, conditional).unwrap();
                        let ba = dominates_action(&support, *b, *a, true, conditional).unwrap();
                        assert!(!(ab && ba));
                    }
                }
            }
        }
    }

    let game = row_dominant_game();
    let support = StrategySupport::full(&game);
    for s in support.iter() {
        assert_eq!(dominates_strategy(&support, s, s, true), Ok(false));
        for t in support.strategy_ids(s.player) {
            let st = dominates_strategy(&support, s, t, true).unwrap();
            let ts = dominates_strategy(&support, t, s, true).unwrap();
            assert!(!(st && ts));
        }
    }
}

#[test]
fn strong_domination_is_transitive() {
    let mut game = ExtensiveGame::new(&["Alice", "Bob"]);
    let alice = game.add_infoset(0, &["a", "b", "c"]).unwrap();
    let bob = game.add_infoset(1, &["x", "y"]).unwrap();
    let children = game.append_decision(game.root(), alice).unwrap();
    let outcomes: [[[i64; 2]; 2]; 3] = [[[3, 0], [5, 1]], [[2, 2], [4, 0]], [[1, 1], [0, 3]]];
    for (child, outcomes) in children.iter().zip(outcomes) {
        let leaves = game.append_decision(*child, bob).unwrap();
        for (leaf, outcome) in leaves.iter().zip(outcomes) {
            game.set_outcome(*leaf, payoffs(&outcome)).unwrap();
        }
    }
    let game = Arc::new(game);
    let support = BehaviorSupport::full(&game);
    let actions: Vec<ActionId> = support.actions(alice).collect();
    for conditional in [true, false] {
        let dominates = |a: ActionId, b: ActionId| {
            dominates_action(&support, a, b, true, conditional).unwrap()
        };
        assert!(dominates(actions[0], actions[1]));
        assert!(dominates(actions[1], actions[2]));
        for a in &actions {
            for b in &actions {
                for c in &actions {
                    if dominates(*a, *b) && dominates(*b, *c) {
                        assert!(dominates(*a, *c));
                    }
                }
            }
        }
    }
}
