//! Small example games shared by the tests.
//!
//! Identifiers are zero-based. Actions are listed in canonical order, i.e. sorted by
//! `(player, infoset, action)`, which is also the order in which the support search
//! removes them.
//!
//! # Single decision
//!
//! ```text
//!        Alice (p0:i0)
//!        /          \
//!     a1 (x)      a2 (y)
//! ```
//!
//! One player, one decision node, two terminal outcomes paying `x` and `y`. Canonical
//! order: `a1 = p0:i0:a0`, `a2 = p0:i0:a1`.
//!
//! # Two-stage game
//!
//! ```text
//!              Alice (p0:i0)
//!              /          \
//!           Out            In
//!          (1, 3)          |
//!                       chance (1/2, 1/2)
//!                      /                 \
//!               Bob (p1:i0)          Bob (p1:i0)
//!               /        \           /        \
//!           Fight      Yield      Fight      Yield
//!           (0, 0)     (2, 1)     (0, 1)     (2, 2)
//! ```
//!
//! Bob does not observe the chance move, so both of his nodes form one information set.
//! Canonical order: `Out = p0:i0:a0`, `In = p0:i0:a1`, `Fight = p1:i0:a0`,
//! `Yield = p1:i0:a1`.
//!
//! - `Yield` strongly dominates `Fight` conditionally (at both of Bob's nodes), but only
//!   weakly unconditionally (both pay Bob 3 after `Out`).
//! - `Out` and `In` are not comparable while Bob keeps both actions; `In` strongly
//!   dominates `Out` once Bob only plays `Yield`, `Out` strongly dominates `In` once Bob
//!   only plays `Fight`.
//!
//! # Nested game
//!
//! ```text
//!        Alice (p0:i0)
//!        /          \
//!       L            R
//!       |          (0, 0)
//!   Bob (p1:i0)
//!    /      \
//!   l        r
//! (1, 1)   (2, 0)
//! ```
//!
//! Canonical order: `L = p0:i0:a0`, `R = p0:i0:a1`, `l = p1:i0:a0`, `r = p1:i0:a1`.
//! Removing `L` makes Bob's information set inactive. The structurally valid subsupports
//! of the full support are `{L R l r}`, `{L R l}`, `{L R r}`, `{L l r}`, `{L l}`, `{L r}`
//! and `{R}`.
//!
//! # Reversed game
//!
//! ```text
//!         Bob (p1:i0)
//!         /        \
//!        x          y
//!        |        (0, 0)
//!   Alice (p0:i0)
//!    /      \
//!   L        R
//! (1, 1)   (0, 2)
//! ```
//!
//! Like the nested game, but the player moving second precedes the first mover in
//! canonical order: `L = p0:i0:a0`, `R = p0:i0:a1`, `x = p1:i0:a0`, `y = p1:i0:a1`.
//! Removing `x` while Alice still has actions deactivates an information set the search
//! has already passed, which the commitment check must reject. There are again seven
//! structurally valid subsupports: three Alice supports combined with `{x y}` and with
//! `{x}`, plus `{y}`.
//!
//! # Row-dominant game
//!
//! ```text
//!              c1       c2
//!   r1      (3, 1)   (3, 0)
//!   r2      (1, 0)   (1, 2)
//! ```
//!
//! A 2x2 normal form game where `r1` strongly dominates `r2`. The column strategies are
//! incomparable until `r2` is gone; afterwards `c1` strongly dominates `c2`.

use crate::game::{ExtensiveGame, NormalGame};
use crate::test_utils::{payoffs, ratio};
use std::sync::Arc;

pub fn single_decision_game(x: i64, y: i64) -> Arc<ExtensiveGame> {
    let mut game = ExtensiveGame::new(&["Alice"]);
    let infoset = game.add_infoset(0, &["a1", "a2"]).unwrap();
    let children = game.append_decision(game.root(), infoset).unwrap();
    game.set_outcome(children[0], payoffs(&[x])).unwrap();
    game.set_outcome(children[1], payoffs(&[y])).unwrap();
    Arc::new(game)
}

pub fn two_stage_game() -> Arc<ExtensiveGame> {
    let mut game = ExtensiveGame::new(&["Alice", "Bob"]);
    let alice = game.add_infoset(0, &["Out", "In"]).unwrap();
    let bob = game.add_infoset(1, &["Fight", "Yield"]).unwrap();
    let entry = game.append_decision(game.root(), alice).unwrap();
    game.set_outcome(entry[0], payoffs(&[1, 3])).unwrap();
    let nature = game
        .append_chance(entry[1], vec![ratio(1, 2), ratio(1, 2)])
        .unwrap();
    let outcomes: [[[i64; 2]; 2]; 2] = [[[0, 0], [2, 1]], [[0, 1], [2, 2]]];
    for (node, outcomes) in nature.iter().zip(outcomes) {
        let children = game.append_decision(*node, bob).unwrap();
        for (child, outcome) in children.iter().zip(outcomes) {
            game.set_outcome(*child, payoffs(&outcome)).unwrap();
        }
    }
    Arc::new(game)
}

pub fn nested_game() -> Arc<ExtensiveGame> {
    let mut game = ExtensiveGame::new(&["Alice", "Bob"]);
    let alice = game.add_infoset(0, &["L", "R"]).unwrap();
    let bob = game.add_infoset(1, &["l", "r"]).unwrap();
    let first = game.append_decision(game.root(), alice).unwrap();
    game.set_outcome(first[1], payoffs(&[0, 0])).unwrap();
    let second = game.append_decision(first[0], bob).unwrap();
    game.set_outcome(second[0], payoffs(&[1, 1])).unwrap();
    game.set_outcome(second[1], payoffs(&[2, 0])).unwrap();
    Arc::new(game)
}

pub fn reversed_game() -> Arc<ExtensiveGame> {
    let mut game = ExtensiveGame::new(&["Alice", "Bob"]);
    let alice = game.add_infoset(0, &["L", "R"]).unwrap();
    let bob = game.add_infoset(1, &["x", "y"]).unwrap();
    let first = game.append_decision(game.root(), bob).unwrap();
    game.set_outcome(first[1], payoffs(&[0, 0])).unwrap();
    let second = game.append_decision(first[0], alice).unwrap();
    game.set_outcome(second[0], payoffs(&[1, 1])).unwrap();
    game.set_outcome(second[1], payoffs(&[0, 2])).unwrap();
    Arc::new(game)
}

pub fn row_dominant_game() -> Arc<NormalGame> {
    let mut game = NormalGame::new(&["Row", "Column"], &[2, 2]).unwrap();
    game.set_outcome(&[0, 0], payoffs(&[3, 1])).unwrap();
    game.set_outcome(&[0, 1], payoffs(&[3, 0])).unwrap();
    game.set_outcome(&[1, 0], payoffs(&[1, 0])).unwrap();
    game.set_outcome(&[1, 1], payoffs(&[1, 2])).unwrap();
    Arc::new(game)
}
