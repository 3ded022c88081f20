use crate::active::ActiveSupport;
use crate::cursor::CanonicalCursor;
use crate::game::{ActionId, InfosetId};

/// True if a removal that `deactivated` the given information sets contradicts decisions
/// the current branch has already made.
///
/// Actions before the cursor are settled: a deactivated information set that precedes the
/// cursor yet keeps some action (or, at the cursor's own information set, keeps an action
/// before the cursor) would be an unreachable leftover no later step is allowed to clean up.
pub fn deletions_violate_active_commitments(
    cursor: &CanonicalCursor<ActionId>,
    support: &ActiveSupport,
    deactivated: &[InfosetId],
) -> bool {
    let Some(current) = cursor.current() else {
        return deactivated
            .iter()
            .any(|infoset| support.num_actions(*infoset) > 0);
    };
    deactivated.iter().any(|infoset| {
        if *infoset < current.infoset() {
            support.num_actions(*infoset) > 0
        } else if *infoset == current.infoset() {
            (0..current.action).any(|action| support.contains(infoset.action(action)))
        } else {
            false
        }
    })
}
