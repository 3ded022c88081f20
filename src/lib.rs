//! Dominance-based support enumeration and elimination for finite games.
//!
//! Given a game (an [`game::ExtensiveGame`] or a [`game::NormalGame`]) and a support (the
//! actions or strategies players are willing to consider), the crate
//!
//! - enumerates subsupports satisfying structural and domination criteria
//!   ([`enumeration`]), and
//! - strips dominated strategies or actions, once or to a fixpoint ([`elimination`]).
//!
//! Long-running procedures are implemented as resumable `computation_process`
//! generators/computations and respect `cancel_this` cancellation.

#[cfg(test)]
mod test_utils;

pub mod active;
pub mod cursor;
pub mod dominance;
pub mod elimination;
pub mod enumeration;
pub mod game;
pub mod progress;
pub mod support;

use crate::support::{BehaviorSupport, SupportSize};

/// A utility method for printing useful metadata of behaviour supports.
fn log_support(support: &BehaviorSupport) -> String {
    format!(
        "actions={}; dof={}",
        support.len(),
        support.num_degrees_of_freedom()
    )
}

/// Extract the "simple name" of a type argument (no module path, no generic arguments).
fn simple_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split('<')
        .next()
        .and_then(|it| it.split("::").last())
        .unwrap_or("?")
}
