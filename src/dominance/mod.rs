//! Pairwise payoff comparisons of actions (extensive form) and strategies (normal form).
//!
//! All comparisons are exact. A comparison enumerates every contingency of the choices
//! it does not control and stops at the first contingency that contradicts the
//! requested kind of domination.

pub(crate) mod behavior;
mod contingency;
pub(crate) mod strategy;

#[cfg(test)]
mod tests;

use crate::game::Payoff;
pub use behavior::{dominates_action, is_action_dominated};
pub use contingency::Contingencies;
pub use strategy::{dominates_strategy, is_strategy_dominated};

/// Accumulates payoff pairs and decides between strong and weak domination.
pub(crate) struct Comparison {
    strong: bool,
    equal: bool,
}

impl Comparison {
    pub fn new(strong: bool) -> Comparison {
        Comparison {
            strong,
            equal: true,
        }
    }

    /// Record one contingency. Returns `false` if it is a counter-example.
    pub fn record(&mut self, dominating: &Payoff, dominated: &Payoff) -> bool {
        if self.strong {
            dominating > dominated
        } else if dominating < dominated {
            false
        } else {
            if dominating > dominated {
                self.equal = false;
            }
            true
        }
    }

    /// Verdict after all contingencies were recorded without a counter-example.
    pub fn verdict(&self) -> bool {
        self.strong || !self.equal
    }
}
