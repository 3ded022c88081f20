use crate::dominance::strategy::dominates_unchecked;
use crate::elimination::dominated_by_partition;
use crate::game::{InvalidArgument, StrategyId};
use crate::support::StrategySupport;
use log::debug;

/// Remove the strategies of `player` that are dominated within `support`.
///
/// Returns the reduced support and whether anything was removed. A player always keeps
/// at least one strategy.
pub fn undominated_strategies(
    support: &StrategySupport,
    player: usize,
    strong: bool,
) -> Result<(StrategySupport, bool), InvalidArgument> {
    support.ensure_player(player)?;
    let mut result = support.clone();
    let removed = eliminate_player(support, &mut result, player, strong);
    Ok((result, removed))
}

/// One elimination pass over each of the given `players`.
///
/// Dominance is always evaluated in the original `support`, so strategies removed for one
/// player do not affect the comparisons of the next one. Iterating to a fixpoint is the
/// caller's responsibility (see [`crate::elimination::IteratedStrategyElimination`]).
pub fn undominated(
    support: &StrategySupport,
    players: &[usize],
    strong: bool,
) -> Result<StrategySupport, InvalidArgument> {
    for player in players {
        support.ensure_player(*player)?;
    }
    let mut result = support.clone();
    for player in players {
        debug!("Dominated strategies for player {player}:");
        eliminate_player(support, &mut result, *player, strong);
    }
    Ok(result)
}

fn eliminate_player(
    support: &StrategySupport,
    result: &mut StrategySupport,
    player: usize,
    strong: bool,
) -> bool {
    let strategies: Vec<StrategyId> = support.strategy_ids(player).collect();
    let dominated = dominated_by_partition(&strategies, |s, t| {
        dominates_unchecked(support, s, t, strong)
    });
    let game = support.game();
    for (strategy, dominator) in &dominated {
        debug!(
            "{} dominated by {}",
            game.strategy_label(*strategy),
            game.strategy_label(*dominator)
        );
    }
    let mut removed = false;
    for (strategy, _) in dominated {
        // The strategy is known to the game, so this cannot fail.
        removed |= result.remove_strategy(strategy).unwrap_or(false);
    }
    removed
}
