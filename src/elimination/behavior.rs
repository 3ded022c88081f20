use crate::dominance::behavior::dominates_unchecked;
use crate::elimination::dominated_by_partition;
use crate::game::{ActionId, InvalidArgument};
use crate::support::BehaviorSupport;
use log::debug;

/// One elimination pass removing dominated actions at every information set of the given
/// `players`.
///
/// As in the normal form, dominance is evaluated in the original `support` and every
/// information set keeps at least one action. Returns the reduced support and whether
/// anything was removed.
pub fn undominated_actions(
    support: &BehaviorSupport,
    players: &[usize],
    strong: bool,
    conditional: bool,
) -> Result<(BehaviorSupport, bool), InvalidArgument> {
    let game = support.game();
    if let Some(player) = players.iter().find(|p| **p >= game.num_players()) {
        return Err(InvalidArgument::UnknownPlayer(*player));
    }

    let mut result = support.clone();
    let mut removed = false;
    for player in players {
        debug!("Dominated actions for player {player}:");
        let infosets = game.infosets().filter(|infoset| infoset.player == *player);
        for infoset in infosets {
            let actions: Vec<ActionId> = support.actions(infoset).collect();
            let dominated = dominated_by_partition(&actions, |a, b| {
                dominates_unchecked(support, a, b, strong, conditional)
            });
            for (action, dominator) in dominated {
                if result.num_actions(infoset) > 1 {
                    debug!(
                        "{} dominated by {}",
                        game.action_label(action),
                        game.action_label(dominator)
                    );
                    removed |= result.remove(action);
                }
            }
        }
    }
    Ok((result, removed))
}
