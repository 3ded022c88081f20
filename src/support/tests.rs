use crate::game::{ActionId, InfosetId, InvalidArgument, StrategyId};
use crate::support::{BehaviorSupport, StrategySupport, SupportSize};
use crate::test_utils::example_games::{row_dominant_game, two_stage_game};
use std::collections::HashSet;

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

#[test]
fn full_and_empty_support() {
    let game = two_stage_game();
    let full = BehaviorSupport::full(&game);
    assert_eq!(full.len(), 4);
    assert!(!full.is_empty());
    assert_eq!(full.num_degrees_of_freedom(), 2);
    assert_eq!(full.iter().collect::<Vec<_>>(), game.actions().collect::<Vec<_>>());
    assert_eq!(full.reachable_nodes_from(game.root()).len(), game.num_nodes());

    let empty = BehaviorSupport::empty(&game);
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.num_degrees_of_freedom(), 0);
    assert_eq!(
        empty.reachable_infosets().into_iter().collect::<Vec<_>>(),
        vec![InfosetId::new(0, 0)]
    );
    assert!(empty.is_subset_of(&full).unwrap());
    assert!(!full.is_subset_of(&empty).unwrap());
}

#[test]
fn removing_actions_changes_reachability() {
    let game = two_stage_game();
    let bob = InfosetId::new(1, 0);
    let mut support = BehaviorSupport::full(&game);
    assert_eq!(support.reachable_members(bob).len(), 2);

    assert_eq!(support.remove_action(IN), Ok(true));
    assert_eq!(support.remove_action(IN), Ok(false));
    assert!(!support.contains(IN));
    assert!(support.contains(OUT));
    assert!(support.reachable_members(bob).is_empty());
    assert!(!support.reachable_infosets().contains(&bob));
    // Bob's actions are still supported, but his information set no longer counts.
    assert_eq!(support.num_actions(bob), 2);
    assert_eq!(support.num_degrees_of_freedom(), 0);

    assert_eq!(support.add_action(IN), Ok(true));
    assert_eq!(support, BehaviorSupport::full(&game));
}

#[test]
fn unknown_actions_are_rejected() {
    let game = two_stage_game();
    let mut support = BehaviorSupport::full(&game);
    let bogus = ActionId::new(1, 0, 5);
    assert_eq!(
        support.remove_action(bogus),
        Err(InvalidArgument::UnknownAction(bogus))
    );
    assert_eq!(
        support.add_action(ActionId::new(3, 0, 0)),
        Err(InvalidArgument::UnknownAction(ActionId::new(3, 0, 0)))
    );
    assert!(!support.contains(bogus));
    assert_eq!(support.num_actions(InfosetId::new(4, 4)), 0);
}

#[test]
fn equality_requires_the_same_game_object() {
    let first = two_stage_game();
    let second = two_stage_game();
    let a = BehaviorSupport::full(&first);
    let b = BehaviorSupport::full(&second);
    assert_eq!(first.as_ref(), second.as_ref());
    assert_ne!(a, b);
    assert_eq!(a.is_subset_of(&b), Err(InvalidArgument::ForeignGame));

    let mut c = a.clone();
    c.remove_action(FIGHT).unwrap();
    let set: HashSet<BehaviorSupport> = [a.clone(), c, a.clone()].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn behavior_support_display() {
    let game = two_stage_game();
    let mut support = BehaviorSupport::full(&game);
    assert_eq!(
        support.to_string(),
        "{ p0:i0[Out In]; p1:i0[Fight Yield] }"
    );
    support.remove_action(FIGHT).unwrap();
    assert_eq!(support.to_string(), "{ p0:i0[Out In]; p1:i0[Yield] }");
}

#[test]
fn strategy_support_editing() {
    let game = row_dominant_game();
    let mut support = StrategySupport::full(&game);
    assert_eq!(support.profile_length(), 4);
    assert_eq!(support.num_degrees_of_freedom(), 2);
    assert_eq!(support.to_string(), "{ p0[1 2]; p1[1 2] }");

    let r1 = StrategyId::new(0, 0);
    let r2 = StrategyId::new(0, 1);
    assert_eq!(support.remove_strategy(r1), Ok(true));
    assert_eq!(support.remove_strategy(r1), Ok(false));
    // The last strategy of a player is kept.
    assert_eq!(support.remove_strategy(r2), Ok(false));
    assert_eq!(support.strategies(0), &[1]);
    assert_eq!(support.num_degrees_of_freedom(), 1);

    assert_eq!(support.add_strategy(r1), Ok(true));
    assert_eq!(support.add_strategy(r1), Ok(false));
    assert_eq!(support.strategies(0), &[0, 1]);
    assert_eq!(support, StrategySupport::full(&game));

    let bogus = StrategyId::new(0, 2);
    assert_eq!(
        support.add_strategy(bogus),
        Err(InvalidArgument::UnknownStrategy(bogus))
    );
    assert_eq!(support.ensure_player(2), Err(InvalidArgument::UnknownPlayer(2)));
}

#[test]
fn strategy_support_subsets() {
    let game = row_dominant_game();
    let full = StrategySupport::full(&game);
    let mut reduced = full.clone();
    reduced.remove_strategy(StrategyId::new(1, 1)).unwrap();
    assert!(reduced.is_subset_of(&full).unwrap());
    assert!(!full.is_subset_of(&reduced).unwrap());
    assert_eq!(
        reduced.iter().collect::<Vec<_>>(),
        vec![
            StrategyId::new(0, 0),
            StrategyId::new(0, 1),
            StrategyId::new(1, 0)
        ]
    );

    let other = StrategySupport::full(&row_dominant_game());
    assert_eq!(full.is_subset_of(&other), Err(InvalidArgument::ForeignGame));
}
