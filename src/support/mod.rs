//! Supports: the subsets of actions (extensive form) or strategies (normal form) that
//! players are willing to consider.

mod behavior;
mod strategy;

#[cfg(test)]
mod tests;

pub use behavior::BehaviorSupport;
pub use strategy::StrategySupport;

/// A size metric used to rank supports (see [`crate::enumeration::sort_by_size`]).
pub trait SupportSize {
    /// Number of supported identifiers minus one per (reachable) decision point.
    fn num_degrees_of_freedom(&self) -> usize;
}
