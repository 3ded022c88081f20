use crate::active::ActiveSupport;
use crate::enumeration::rules::NashCandidates;
use crate::enumeration::search::{SearchState, SubsupportStep};
use crate::enumeration::{EnumerationConfig, sort_by_size};
use crate::game::ActionId;
use crate::log_support;
use crate::support::BehaviorSupport;
use cancel_this::is_cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep, GeneratorStep};
use log::{debug, info};
use std::sync::Arc;

/// Internal state of the possible-Nash support computation.
pub struct PossibleNashState {
    phase: Phase,
    search: SearchState,
    candidates: Vec<BehaviorSupport>,
}

enum Phase {
    Start,
    /// Collect candidates without strong dominations.
    Search,
    /// Check the candidates (from the last one down to the first) for weak dominations;
    /// the value is the number of candidates still to check.
    Filter(usize),
}

impl From<BehaviorSupport> for PossibleNashState {
    fn from(value: BehaviorSupport) -> Self {
        PossibleNashState {
            phase: Phase::Start,
            search: SearchState::from(value),
            candidates: Vec::new(),
        }
    }
}

impl From<&BehaviorSupport> for PossibleNashState {
    fn from(value: &BehaviorSupport) -> Self {
        PossibleNashState::from(value.clone())
    }
}

/// Implementation of [`ComputationStep`] for the possible-Nash support computation.
///
/// First, all valid subsupports without strong dominations are enumerated (reported as
/// 50% progress). Then, every candidate exhibiting a weak domination is dropped, including
/// a weak domination by a sibling action that is absent from the candidate. The result
/// is sorted by size.
pub struct PossibleNashStep;

impl ComputationStep<EnumerationConfig, PossibleNashState, Vec<BehaviorSupport>>
    for PossibleNashStep
{
    fn step(
        context: &EnumerationConfig,
        state: &mut PossibleNashState,
    ) -> Completable<Vec<BehaviorSupport>> {
        match state.phase {
            Phase::Start => {
                context.set_progress(0.0);
                state.phase = Phase::Search;
                Err(Suspended)
            }
            Phase::Search => {
                match SubsupportStep::<NashCandidates>::step(context, &mut state.search)? {
                    Some(candidate) => state.candidates.push(candidate),
                    None => {
                        info!(
                            "PossibleNash found {} candidate(s); checking weak dominations.",
                            state.candidates.len()
                        );
                        context.set_progress(0.5);
                        state.phase = Phase::Filter(state.candidates.len());
                    }
                }
                Err(Suspended)
            }
            Phase::Filter(0) => {
                let result = sort_by_size(std::mem::take(&mut state.candidates));
                info!("PossibleNash finished with {} support(s).", result.len());
                Ok(result)
            }
            Phase::Filter(remaining) => {
                let total = state.candidates.len() as f64;
                context.set_progress((2.0 - remaining as f64 / total) / 2.0);
                is_cancelled!()?;
                context.check_progress()?;

                let index = remaining - 1;
                if exhibits_weak_domination(state.search.order(), &state.candidates[index]) {
                    debug!(
                        "PossibleNash dropped weakly dominated candidate ({}).",
                        log_support(&state.candidates[index])
                    );
                    state.candidates.remove(index);
                }
                state.phase = Phase::Filter(index);
                Err(Suspended)
            }
        }
    }
}

/// True if some action of `candidate` is weakly dominated (conditionally or
/// unconditionally) by another action at its information set.
///
/// A dominating action absent from `candidate` is considered too, as long as adding it
/// keeps the support structurally valid.
fn exhibits_weak_domination(order: &[ActionId], candidate: &BehaviorSupport) -> bool {
    let game = Arc::clone(candidate.game_handle());
    let mut current = ActiveSupport::from(candidate);
    let weakly_dominates = |support: &ActiveSupport, a: ActionId, b: ActionId| {
        support.dominates_unchecked(a, b, false, true)
            || support.dominates_unchecked(a, b, false, false)
    };
    for action in order.iter().copied().filter(|it| candidate.contains(*it)) {
        let infoset = action.infoset();
        for other in (0..game.num_actions(infoset)).map(|a| infoset.action(a)) {
            if other == action {
                continue;
            }
            if current.contains(other) {
                if weakly_dominates(&current, other, action) {
                    return true;
                }
            } else {
                current.insert(other);
                let found = current.has_active_actions_at_active_infosets_and_no_others()
                    && weakly_dominates(&current, other, action);
                current.remove(other);
                if found {
                    return true;
                }
            }
        }
    }
    false
}
