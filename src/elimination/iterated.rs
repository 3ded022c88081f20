use crate::elimination::{EliminationConfig, EliminationDepth, undominated, undominated_actions};
use crate::simple_type_name;
use crate::support::{BehaviorSupport, StrategySupport, SupportSize};
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{debug, info};
use std::fmt::Display;
use std::marker::PhantomData;

/// A support that can be reduced by one elimination pass.
pub trait EliminationPass: Clone + Display + SupportSize {
    /// Run one pass; return the reduced support and whether anything was removed.
    ///
    /// # Panics
    ///
    /// Panics if the configuration names a player outside the game.
    fn eliminate(&self, config: &EliminationConfig) -> (Self, bool);

    /// Number of supported strategies or actions (used for logging).
    fn num_elements(&self) -> usize;
}

impl EliminationPass for StrategySupport {
    fn eliminate(&self, config: &EliminationConfig) -> (Self, bool) {
        match undominated(self, &config.players, config.strong) {
            Ok(reduced) => {
                let removed = reduced.profile_length() < self.profile_length();
                (reduced, removed)
            }
            Err(error) => panic!("{error}"),
        }
    }

    fn num_elements(&self) -> usize {
        self.profile_length()
    }
}

impl EliminationPass for BehaviorSupport {
    fn eliminate(&self, config: &EliminationConfig) -> (Self, bool) {
        match undominated_actions(self, &config.players, config.strong, config.conditional) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    fn num_elements(&self) -> usize {
        self.len()
    }
}

/// Internal state of an iterated elimination: the current support and the number of
/// passes performed so far.
pub struct EliminationState<S> {
    support: S,
    iteration: usize,
}

impl<S: EliminationPass> From<S> for EliminationState<S> {
    fn from(value: S) -> Self {
        EliminationState {
            support: value,
            iteration: 0,
        }
    }
}

impl From<&StrategySupport> for EliminationState<StrategySupport> {
    fn from(value: &StrategySupport) -> Self {
        EliminationState::from(value.clone())
    }
}

impl From<&BehaviorSupport> for EliminationState<BehaviorSupport> {
    fn from(value: &BehaviorSupport) -> Self {
        EliminationState::from(value.clone())
    }
}

impl<S> EliminationState<S> {
    pub fn support(&self) -> &S {
        &self.support
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

/// Implementation of [`ComputationStep`] that runs one [`EliminationPass`] per step until
/// nothing is removed (or once, for [`EliminationDepth::OneLevel`]).
pub struct IteratedElimination<S: EliminationPass>(PhantomData<S>);

impl<S: EliminationPass> ComputationStep<EliminationConfig, EliminationState<S>, S>
    for IteratedElimination<S>
{
    fn step(context: &EliminationConfig, state: &mut EliminationState<S>) -> Completable<S> {
        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Elimination<{}> canceled (exceeded iteration count).",
                state.iteration,
                simple_type_name::<S>()
            );
            return Err(Cancelled::new("EliminationConfig::max_iterations").into());
        } else {
            state.iteration += 1;
        }
        is_cancelled!()?;

        let (reduced, removed) = state.support.eliminate(context);
        if !removed || context.depth == EliminationDepth::OneLevel {
            info!(
                "[iteration:{}] Elimination<{}> finished with {} element(s) ({}).",
                state.iteration,
                simple_type_name::<S>(),
                reduced.num_elements(),
                reduced
            );
            state.support = reduced.clone();
            Ok(reduced)
        } else {
            debug!(
                "[iteration:{}] Elimination<{}> decreased to {} element(s); dof={}.",
                state.iteration,
                simple_type_name::<S>(),
                reduced.num_elements(),
                reduced.num_degrees_of_freedom()
            );
            state.support = reduced;
            Err(Suspended)
        }
    }
}
