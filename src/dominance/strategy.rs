use crate::dominance::Comparison;
use crate::dominance::contingency::Contingencies;
use crate::game::{InvalidArgument, StrategyId};
use crate::support::StrategySupport;

/// Test whether strategy `s` dominates strategy `t` (both of the same player) against
/// every profile of the other players' supported strategies.
///
/// Profiles without an outcome pay zero.
pub fn dominates_strategy(
    support: &StrategySupport,
    s: StrategyId,
    t: StrategyId,
    strong: bool,
) -> Result<bool, InvalidArgument> {
    for strategy in [s, t] {
        if !support.game().contains_strategy(strategy) {
            return Err(InvalidArgument::UnknownStrategy(strategy));
        }
    }
    if s.player != t.player {
        return Err(InvalidArgument::DifferentPlayers(s, t));
    }
    Ok(dominates_unchecked(support, s, t, strong))
}

/// True if some other supported strategy of the same player dominates `strategy`.
pub fn is_strategy_dominated(
    support: &StrategySupport,
    strategy: StrategyId,
    strong: bool,
) -> Result<bool, InvalidArgument> {
    if !support.game().contains_strategy(strategy) {
        return Err(InvalidArgument::UnknownStrategy(strategy));
    }
    Ok(support
        .strategy_ids(strategy.player)
        .filter(|other| *other != strategy)
        .any(|other| dominates_unchecked(support, other, strategy, strong)))
}

pub(crate) fn dominates_unchecked(
    support: &StrategySupport,
    s: StrategyId,
    t: StrategyId,
    strong: bool,
) -> bool {
    let game = support.game();
    let player = s.player;
    let options = (0..support.num_players())
        .map(|p| {
            if p == player {
                vec![s.strategy]
            } else {
                support.strategies(p).to_vec()
            }
        })
        .collect();
    let mut contingencies = Contingencies::new(options);
    let mut comparison = Comparison::new(strong);
    let mut profile = vec![0; support.num_players()];
    loop {
        for (p, entry) in profile.iter_mut().enumerate() {
            // Every player has at least one supported strategy.
            *entry = contingencies.choice(p).unwrap_or_default();
        }
        profile[player] = s.strategy;
        let payoff_s = game.payoff(&profile, player);
        profile[player] = t.strategy;
        let payoff_t = game.payoff(&profile, player);
        if !comparison.record(&payoff_s, &payoff_t) {
            return false;
        }
        if !contingencies.advance() {
            return comparison.verdict();
        }
    }
}
