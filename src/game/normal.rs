use crate::game::{GameError, Payoff, StrategyId};
use num_traits::Zero;

/// A finite normal form (strategic) game.
///
/// Outcomes are stored in a dense table indexed by the mixed-radix encoding of the
/// strategy profile (the first player varies fastest). A profile without an outcome
/// pays zero to every player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalGame {
    players: Vec<String>,
    strategies: Vec<Vec<String>>,
    outcomes: Vec<Option<Vec<Payoff>>>,
}

impl NormalGame {
    /// Create a game where player `i` has `strategy_counts[i]` strategies and no outcomes.
    pub fn new<S: ToString>(
        players: &[S],
        strategy_counts: &[usize],
    ) -> Result<NormalGame, GameError> {
        if players.len() != strategy_counts.len() {
            return Err(GameError::InvalidProfile(strategy_counts.to_vec()));
        }
        if let Some(player) = strategy_counts.iter().position(|count| *count == 0) {
            return Err(GameError::UnknownPlayer(player));
        }
        let size = strategy_counts.iter().product();
        Ok(NormalGame {
            players: players.iter().map(|it| it.to_string()).collect(),
            strategies: strategy_counts
                .iter()
                .map(|count| (0..*count).map(|s| format!("{}", s + 1)).collect())
                .collect(),
            outcomes: vec![None; size],
        })
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player_name(&self, player: usize) -> &str {
        &self.players[player]
    }

    pub fn num_strategies(&self, player: usize) -> usize {
        self.strategies[player].len()
    }

    pub fn strategy_label(&self, strategy: StrategyId) -> &str {
        &self.strategies[strategy.player][strategy.strategy]
    }

    pub fn set_strategy_label<S: ToString>(
        &mut self,
        strategy: StrategyId,
        label: S,
    ) -> Result<(), GameError> {
        if !self.contains_strategy(strategy) {
            return Err(GameError::InvalidProfile(vec![strategy.player, strategy.strategy]));
        }
        self.strategies[strategy.player][strategy.strategy] = label.to_string();
        Ok(())
    }

    pub fn contains_strategy(&self, strategy: StrategyId) -> bool {
        strategy.player < self.strategies.len()
            && strategy.strategy < self.strategies[strategy.player].len()
    }

    /// Attach an outcome to the pure strategy `profile` (one strategy index per player).
    pub fn set_outcome(&mut self, profile: &[usize], payoffs: Vec<Payoff>) -> Result<(), GameError> {
        if payoffs.len() != self.players.len() {
            return Err(GameError::PayoffLength {
                expected: self.players.len(),
                found: payoffs.len(),
            });
        }
        let index = self.profile_index(profile)?;
        self.outcomes[index] = Some(payoffs);
        Ok(())
    }

    pub fn outcome(&self, profile: &[usize]) -> Option<&[Payoff]> {
        let index = self.profile_index(profile).ok()?;
        self.outcomes[index].as_deref()
    }

    /// Payoff of `player` at `profile`; zero if no outcome is attached.
    ///
    /// # Panics
    ///
    /// Panics if `profile` is not a valid profile of this game.
    pub fn payoff(&self, profile: &[usize], player: usize) -> Payoff {
        let index = match self.profile_index(profile) {
            Ok(index) => index,
            Err(error) => panic!("{error}"),
        };
        self.outcomes[index]
            .as_ref()
            .map(|payoffs| payoffs[player].clone())
            .unwrap_or_else(Payoff::zero)
    }

    /// Validate a game that was not built through [`NormalGame::new`] (e.g. deserialized).
    pub fn check(&self) -> Result<(), GameError> {
        if self.strategies.len() != self.players.len() {
            return Err(GameError::Malformed(
                "strategy table does not match players".to_string(),
            ));
        }
        if let Some(player) = self.strategies.iter().position(|it| it.is_empty()) {
            return Err(GameError::UnknownPlayer(player));
        }
        let size: usize = self.strategies.iter().map(|it| it.len()).product();
        if self.outcomes.len() != size {
            return Err(GameError::Malformed(format!(
                "expected {size} outcomes, found {}",
                self.outcomes.len()
            )));
        }
        for payoffs in self.outcomes.iter().flatten() {
            if payoffs.len() != self.players.len() {
                return Err(GameError::PayoffLength {
                    expected: self.players.len(),
                    found: payoffs.len(),
                });
            }
        }
        Ok(())
    }

    fn profile_index(&self, profile: &[usize]) -> Result<usize, GameError> {
        if profile.len() != self.strategies.len() {
            return Err(GameError::InvalidProfile(profile.to_vec()));
        }
        let mut index = 0;
        let mut radix = 1;
        for (strategy, strategies) in profile.iter().zip(&self.strategies) {
            if *strategy >= strategies.len() {
                return Err(GameError::InvalidProfile(profile.to_vec()));
            }
            index += strategy * radix;
            radix *= strategies.len();
        }
        Ok(index)
    }
}
