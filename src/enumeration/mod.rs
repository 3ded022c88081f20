//! Backtracking enumeration of the subsupports of a behaviour support.
//!
//! All variants share one search skeleton ([`SubsupportStep`]): starting from the given
//! support, the search removes actions one at a time in canonical order. A cursor marks
//! the actions already decided by the current branch, so every subset is visited at most
//! once. Variants differ in which visited supports they report and in which actions they
//! remove unconditionally ([`SearchRule`]):
//!
//! - [`AllSubsupports`]: every subset (including the empty support).
//! - [`AllInequivalentSubsupports`]: one structurally valid support per path-equivalence
//!   class.
//! - [`AllUndominatedSubsupports`]: valid supports without dominated actions.
//! - [`PossibleNashCandidates`]: valid supports without strongly dominated actions.
//! - [`PossibleNashSubsupports`]: the candidates without weak dominations, sorted by size.
//!
//! The searches are [`Generator`]s: results are produced lazily in search order and the
//! search can be cancelled (see [`EnumerationConfig`] and [`crate::progress`]).

use crate::support::BehaviorSupport;
use cancel_this::Cancellable;
use computation_process::{Algorithm, Computation, Generator, Stateful};

mod commitments;
mod enumeration_config;
mod possible_nash;
mod ranking;
mod rules;
mod search;


pub use commitments::deletions_violate_active_commitments;
pub use enumeration_config::EnumerationConfig;
pub use possible_nash::{PossibleNashState, PossibleNashStep};
pub use ranking::sort_by_size;
pub use rules::{AcceptAll, Examination, Inequivalent, NashCandidates, SearchRule, Undominated};
pub use search::{SearchState, SubsupportStep};

/// A helper alias for a support search driven by the given [`SearchRule`].
pub type SubsupportGenerator<R> =
    Generator<EnumerationConfig, SearchState, BehaviorSupport, SubsupportStep<R>>;

/// Enumerates every subset of the starting support.
pub type AllSubsupports = SubsupportGenerator<AcceptAll>;

/// Enumerates one structurally valid subsupport per path-equivalence class: two supports
/// are path-equivalent if they agree on every information set reachable under either.
pub type AllInequivalentSubsupports = SubsupportGenerator<Inequivalent>;

/// Enumerates valid subsupports that contain no action dominated (per
/// [`EnumerationConfig::strong`] and [`EnumerationConfig::conditional`]) within the
/// subsupport itself.
pub type AllUndominatedSubsupports = SubsupportGenerator<Undominated>;

/// Enumerates valid subsupports without strongly dominated actions.
pub type PossibleNashCandidates = SubsupportGenerator<NashCandidates>;

/// Computes the supports that can carry a Nash equilibrium: [`PossibleNashCandidates`]
/// without weak dominations, sorted by size.
pub type PossibleNashSubsupports = Computation<
    EnumerationConfig,
    PossibleNashState,
    Vec<BehaviorSupport>,
    PossibleNashStep,
>;

pub fn all_subsupports(
    support: &BehaviorSupport,
    config: &EnumerationConfig,
) -> Cancellable<Vec<BehaviorSupport>> {
    AllSubsupports::configure(config, support).collect()
}

pub fn all_inequivalent_subsupports(
    support: &BehaviorSupport,
    config: &EnumerationConfig,
) -> Cancellable<Vec<BehaviorSupport>> {
    AllInequivalentSubsupports::configure(config, support).collect()
}

pub fn all_undominated_subsupports(
    support: &BehaviorSupport,
    config: &EnumerationConfig,
) -> Cancellable<Vec<BehaviorSupport>> {
    AllUndominatedSubsupports::configure(config, support).collect()
}

pub fn possible_nash_subsupports(
    support: &BehaviorSupport,
    config: &EnumerationConfig,
) -> Cancellable<Vec<BehaviorSupport>> {
    PossibleNashSubsupports::run(config, support)
}
