//! Elimination of dominated strategies (normal form) and actions (extensive form).
//!
//! A single pass ([`undominated`], [`undominated_actions`]) compares strategies within
//! the input support and removes the dominated ones. The iterated variants
//! ([`IteratedStrategyElimination`], [`IteratedActionElimination`]) repeat the pass on
//! its own output until nothing changes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use support_enum::elimination::{EliminationConfig, EliminationDepth, IteratedStrategyElimination};
//! use support_enum::game::{NormalGame, Payoff};
//! use support_enum::support::StrategySupport;
//! use computation_process::Algorithm;
//!
//! let mut game = NormalGame::new(&["Row", "Column"], &[2, 2]).unwrap();
//! let p = |n: i64| Payoff::from_integer(n.into());
//! game.set_outcome(&[0, 0], vec![p(3), p(1)]).unwrap();
//! game.set_outcome(&[0, 1], vec![p(3), p(0)]).unwrap();
//! game.set_outcome(&[1, 0], vec![p(1), p(0)]).unwrap();
//! game.set_outcome(&[1, 1], vec![p(1), p(2)]).unwrap();
//!
//! let mut config = EliminationConfig::new(2);
//! config.strong = true;
//! config.depth = EliminationDepth::Iterative;
//! let support = StrategySupport::full(&Arc::new(game));
//! let reduced = IteratedStrategyElimination::run(config, &support).unwrap();
//! assert_eq!(reduced.profile_length(), 2);
//! ```

use crate::support::{BehaviorSupport, StrategySupport};
use computation_process::Computation;

mod behavior;
mod elimination_config;
mod iterated;
mod strategy;


pub use behavior::undominated_actions;
pub use elimination_config::{EliminationConfig, EliminationDepth};
pub use iterated::{EliminationPass, EliminationState, IteratedElimination};
pub use strategy::{undominated, undominated_strategies};

/// Iterated elimination of dominated strategies in a normal form game.
pub type IteratedStrategyElimination = Computation<
    EliminationConfig,
    EliminationState<StrategySupport>,
    StrategySupport,
    IteratedElimination<StrategySupport>,
>;

/// Iterated elimination of dominated actions in an extensive form game.
pub type IteratedActionElimination = Computation<
    EliminationConfig,
    EliminationState<BehaviorSupport>,
    BehaviorSupport,
    IteratedElimination<BehaviorSupport>,
>;

/// Split `items` into undominated and dominated ones and return the dominated ones,
/// each with the item that dominated it (in the order they were found).
///
/// This is a selection-style partition: `items[..min]` holds items confirmed so far,
/// `items[min..=dis]` the undecided ones and `items[dis + 1..]` the dominated ones. An
/// undecided item dominated by a confirmed one is dropped immediately. Otherwise it
/// becomes the next pivot and is compared against the remaining undecided items; the
/// loser of each comparison is dropped and the pivot is replaced if it loses. Without
/// any domination this degrades to all pairwise comparisons.
pub(crate) fn dominated_by_partition<T: Copy, F: Fn(T, T) -> bool>(
    items: &[T],
    dominates: F,
) -> Vec<(T, T)> {
    let mut set = items.to_vec();
    let mut dominated = Vec::new();
    let mut min = 0usize;
    // One past the last undecided position.
    let mut end = set.len();
    while min < end {
        let candidate = set[end - 1];
        if let Some(dominator) = set[..min].iter().find(|it| dominates(**it, candidate)) {
            dominated.push((candidate, *dominator));
            end -= 1;
            continue;
        }
        set.swap(end - 1, min);
        let mut inc = min + 1;
        while inc < end {
            let (pivot, last) = (set[min], set[end - 1]);
            if dominates(pivot, last) {
                dominated.push((last, pivot));
                end -= 1;
            } else if dominates(last, pivot) {
                dominated.push((pivot, last));
                set.swap(end - 1, min);
                end -= 1;
            } else {
                set.swap(end - 1, inc);
                inc += 1;
            }
        }
        min += 1;
    }
    dominated
}
