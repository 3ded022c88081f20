use crate::active::ActiveSupport;
use crate::cursor::CanonicalCursor;
use crate::enumeration::EnumerationConfig;
use crate::game::ActionId;

/// What the search should do at the current node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Examination {
    /// The node (and its whole subtree) is inconsistent with the branch history.
    Abort,
    /// These actions must be removed before anything else happens at this node.
    Force(Vec<ActionId>),
    /// Optionally report the current support, then try every free removal at or after
    /// the cursor.
    Branch { accept: bool },
}

/// The part of a support search that differs between the enumeration variants.
///
/// The search owns the working support and the cursor; a rule only inspects them.
pub trait SearchRule: 'static {
    /// Skip free removals that deactivate information sets already settled by the branch.
    const CHECK_COMMITMENTS: bool;

    fn examine(
        config: &EnumerationConfig,
        support: &ActiveSupport,
        order: &[ActionId],
        cursor: &CanonicalCursor<ActionId>,
    ) -> Examination;
}

/// Every subset of the starting support.
pub struct AcceptAll;

/// One structurally valid support per path-equivalence class.
pub struct Inequivalent;

/// Valid supports without actions dominated within the support itself.
pub struct Undominated;

/// Valid supports without strongly dominated actions (under either conditional or
/// unconditional comparison); the first stage of the possible-Nash search.
pub struct NashCandidates;

impl SearchRule for AcceptAll {
    const CHECK_COMMITMENTS: bool = false;

    fn examine(
        _config: &EnumerationConfig,
        _support: &ActiveSupport,
        _order: &[ActionId],
        _cursor: &CanonicalCursor<ActionId>,
    ) -> Examination {
        Examination::Branch { accept: true }
    }
}

impl SearchRule for Inequivalent {
    const CHECK_COMMITMENTS: bool = true;

    fn examine(
        _config: &EnumerationConfig,
        support: &ActiveSupport,
        _order: &[ActionId],
        _cursor: &CanonicalCursor<ActionId>,
    ) -> Examination {
        Examination::Branch {
            accept: support.has_active_actions_at_active_infosets_and_no_others(),
        }
    }
}

impl SearchRule for Undominated {
    const CHECK_COMMITMENTS: bool = true;

    fn examine(
        config: &EnumerationConfig,
        support: &ActiveSupport,
        order: &[ActionId],
        cursor: &CanonicalCursor<ActionId>,
    ) -> Examination {
        let check_domination = support.has_active_actions_at_active_infosets();
        let forced = collect_forced(support, order, cursor, |action| {
            if !support.infoset_is_active(action.infoset()) {
                return true;
            }
            check_domination
                && support.is_dominated_unchecked(action, config.strong, config.conditional)
        });
        into_examination(forced, support, true)
    }
}

impl SearchRule for NashCandidates {
    const CHECK_COMMITMENTS: bool = true;

    fn examine(
        _config: &EnumerationConfig,
        support: &ActiveSupport,
        order: &[ActionId],
        cursor: &CanonicalCursor<ActionId>,
    ) -> Examination {
        let check_domination = support.has_active_actions_at_active_infosets();
        let mut add_support = true;
        let forced = collect_forced(support, order, cursor, |action| {
            if !support.infoset_is_active(action.infoset()) {
                return true;
            }
            if check_domination
                && (support.is_dominated_unchecked(action, true, true)
                    || support.is_dominated_unchecked(action, true, false))
            {
                // A dominated action disqualifies this node, but it can only be removed
                // once no later branch can make its infoset unreachable.
                add_support = false;
                return support.guaranteed_active_by_prior_commitments(cursor, action.infoset());
            }
            false
        });
        into_examination(forced, support, add_support)
    }
}

/// Scan the supported actions in canonical order and collect those `is_forced` selects.
///
/// Returns `None` as soon as a forced action precedes the cursor: such an action was
/// already kept by the branch, so the branch cannot be completed.
fn collect_forced<F: FnMut(ActionId) -> bool>(
    support: &ActiveSupport,
    order: &[ActionId],
    cursor: &CanonicalCursor<ActionId>,
    mut is_forced: F,
) -> Option<Vec<ActionId>> {
    let mut result = Vec::new();
    // `order` also lists actions already removed in this branch.
    for action in order.iter().filter(|it| support.contains(**it)) {
        if is_forced(*action) {
            if cursor.is_subsequent_to(*action) {
                return None;
            }
            result.push(*action);
        }
    }
    Some(result)
}

fn into_examination(
    forced: Option<Vec<ActionId>>,
    support: &ActiveSupport,
    accept: bool,
) -> Examination {
    match forced {
        None => Examination::Abort,
        Some(deletions) if !deletions.is_empty() => Examination::Force(deletions),
        Some(_) => Examination::Branch {
            accept: accept && support.has_active_actions_at_active_infosets_and_no_others(),
        },
    }
}
