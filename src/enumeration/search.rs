use crate::active::ActiveSupport;
use crate::cursor::{CanonicalCursor, is_canonical};
use crate::enumeration::commitments::deletions_violate_active_commitments;
use crate::enumeration::rules::{Examination, SearchRule};
use crate::enumeration::EnumerationConfig;
use crate::game::ActionId;
use crate::support::BehaviorSupport;
use crate::{log_support, simple_type_name};
use cancel_this::{Cancelled, is_cancelled};
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, GeneratorStep};
use log::{debug, info, trace};
use std::marker::PhantomData;

/// The state of a backtracking search over the subsupports of a fixed starting support.
///
/// The recursion is kept on an explicit stack of frames, so the search can be suspended
/// (or cancelled) after any step and resumed later. The working support is only mutated in
/// pairs: every removal pushes a [`Frame::Restore`] that re-adds the removed actions before
/// the next sibling branch runs.
pub struct SearchState {
    /// The actions of the starting support in canonical order.
    order: Vec<ActionId>,
    active: ActiveSupport,
    stack: Vec<Frame>,
    visited: usize,
}

enum Frame {
    /// Examine the working support with the cursor at the given position of `order`.
    Visit(usize),
    /// Try to remove the next supported action at or after the given position.
    Branch(usize),
    /// Re-add the given actions.
    Restore(Vec<ActionId>),
}

/// Implementation of [`GeneratorStep`] shared by all support enumeration variants. The
/// variants only differ in their [`SearchRule`].
pub struct SubsupportStep<R: SearchRule>(PhantomData<R>);

impl From<BehaviorSupport> for SearchState {
    fn from(value: BehaviorSupport) -> Self {
        let order: Vec<ActionId> = value.iter().collect();
        debug_assert!(is_canonical(&order));
        SearchState {
            order,
            active: ActiveSupport::new(value),
            stack: vec![Frame::Visit(0)],
            visited: 0,
        }
    }
}

impl From<&BehaviorSupport> for SearchState {
    fn from(value: &BehaviorSupport) -> Self {
        SearchState::from(value.clone())
    }
}

impl SearchState {
    /// Number of search nodes visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// The working support. Between steps, it is the support of the node that is
    /// examined next.
    pub fn support(&self) -> &BehaviorSupport {
        self.active.support()
    }

    pub(crate) fn order(&self) -> &[ActionId] {
        &self.order
    }
}

impl<R: SearchRule> GeneratorStep<EnumerationConfig, SearchState, BehaviorSupport>
    for SubsupportStep<R>
{
    fn step(
        context: &EnumerationConfig,
        state: &mut SearchState,
    ) -> Completable<Option<BehaviorSupport>> {
        if let Some(Frame::Visit(_)) = state.stack.last() {
            // Poll before popping the frame, so that a cancelled search can be resumed.
            is_cancelled!()?;
            context.check_progress()?;
            if state.visited >= context.max_visited {
                debug!(
                    "[visited:{}] Search<{}> canceled (exceeded visited count).",
                    state.visited,
                    simple_type_name::<R>()
                );
                return Err(Cancelled::new("EnumerationConfig::max_visited").into());
            }
            state.visited += 1;
        }

        let Some(frame) = state.stack.pop() else {
            info!(
                "[visited:{}] Search<{}> finished.",
                state.visited,
                simple_type_name::<R>()
            );
            return Ok(None);
        };

        match frame {
            Frame::Visit(position) => visit::<R>(context, state, position),
            Frame::Branch(next) => {
                branch::<R>(state, next);
                Err(Suspended)
            }
            Frame::Restore(actions) => {
                for action in actions {
                    state.active.insert(action);
                }
                Err(Suspended)
            }
        }
    }
}

fn visit<R: SearchRule>(
    context: &EnumerationConfig,
    state: &mut SearchState,
    position: usize,
) -> Completable<Option<BehaviorSupport>> {
    let cursor = CanonicalCursor::at(&state.order, position);
    match R::examine(context, &state.active, &state.order, &cursor) {
        Examination::Abort => {
            debug!(
                "[visited:{}] Search<{}> aborted branch ({}).",
                state.visited,
                simple_type_name::<R>(),
                log_support(state.active.support())
            );
            Err(Suspended)
        }
        Examination::Force(deletions) => {
            // Forced deletions are applied together and undone together.
            let mut applied = Vec::new();
            let mut violated = false;
            for action in deletions {
                applied.push(action);
                let deactivated = state.active.remove(action);
                if deletions_violate_active_commitments(&cursor, &state.active, &deactivated) {
                    violated = true;
                    break;
                }
            }
            if violated {
                for action in applied {
                    state.active.insert(action);
                }
                debug!(
                    "[visited:{}] Search<{}> forced deletions violate commitments.",
                    state.visited,
                    simple_type_name::<R>()
                );
            } else {
                debug!(
                    "[visited:{}] Search<{}> forced {} deletion(s) ({}).",
                    state.visited,
                    simple_type_name::<R>(),
                    applied.len(),
                    log_support(state.active.support())
                );
                state.stack.push(Frame::Restore(applied));
                state.stack.push(Frame::Visit(position));
            }
            Err(Suspended)
        }
        Examination::Branch { accept } => {
            state.stack.push(Frame::Branch(position));
            if accept {
                debug!(
                    "[visited:{}] Search<{}> found ({}).",
                    state.visited,
                    simple_type_name::<R>(),
                    log_support(state.active.support())
                );
                Ok(Some(state.active.support().clone()))
            } else {
                Err(Suspended)
            }
        }
    }
}

fn branch<R: SearchRule>(state: &mut SearchState, next: usize) {
    let Some(position) = (next..state.order.len()).find(|p| state.active.contains(state.order[*p]))
    else {
        return;
    };
    let action = state.order[position];
    let deactivated = state.active.remove(action);
    state.stack.push(Frame::Branch(position + 1));

    let cursor = CanonicalCursor::at(&state.order, position);
    if R::CHECK_COMMITMENTS
        && deletions_violate_active_commitments(&cursor, &state.active, &deactivated)
    {
        trace!("[{action}] Removal skipped (violates commitments).");
        state.active.insert(action);
    } else {
        trace!("[{action}] Removed ({}).", log_support(state.active.support()));
        state.stack.push(Frame::Restore(vec![action]));
        state.stack.push(Frame::Visit(position));
    }
}
