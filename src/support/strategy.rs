use crate::game::{InvalidArgument, NormalGame, StrategyId};
use crate::support::SupportSize;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A subset of the pure strategies of a [`NormalGame`], kept sorted per player.
#[derive(Clone, Debug)]
pub struct StrategySupport {
    game: Arc<NormalGame>,
    strategies: Vec<Vec<usize>>,
}

impl StrategySupport {
    /// The support containing every strategy of `game`.
    pub fn full(game: &Arc<NormalGame>) -> StrategySupport {
        StrategySupport {
            strategies: (0..game.num_players())
                .map(|player| (0..game.num_strategies(player)).collect())
                .collect(),
            game: game.clone(),
        }
    }

    pub fn game(&self) -> &NormalGame {
        &self.game
    }

    pub fn game_handle(&self) -> &Arc<NormalGame> {
        &self.game
    }

    pub fn same_game(&self, other: &StrategySupport) -> bool {
        Arc::ptr_eq(&self.game, &other.game)
    }

    pub fn num_players(&self) -> usize {
        self.strategies.len()
    }

    pub fn contains(&self, strategy: StrategyId) -> bool {
        self.strategies
            .get(strategy.player)
            .is_some_and(|it| it.binary_search(&strategy.strategy).is_ok())
    }

    /// Supported strategy indices of `player`, in increasing order.
    pub fn strategies(&self, player: usize) -> &[usize] {
        &self.strategies[player]
    }

    /// Supported strategies of `player` as identifiers.
    pub fn strategy_ids(&self, player: usize) -> impl Iterator<Item = StrategyId> + '_ {
        self.strategies[player]
            .iter()
            .map(move |s| StrategyId::new(player, *s))
    }

    /// All supported strategies in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = StrategyId> + '_ {
        (0..self.strategies.len()).flat_map(|player| self.strategy_ids(player))
    }

    pub fn num_strategies(&self, player: usize) -> usize {
        self.strategies[player].len()
    }

    /// Total number of supported strategies over all players.
    pub fn profile_length(&self) -> usize {
        self.strategies.iter().map(|it| it.len()).sum()
    }

    /// Add `strategy`, keeping the per-player order. Returns `false` if already present.
    pub fn add_strategy(&mut self, strategy: StrategyId) -> Result<bool, InvalidArgument> {
        self.ensure_known(strategy)?;
        let list = &mut self.strategies[strategy.player];
        match list.binary_search(&strategy.strategy) {
            Ok(_) => Ok(false),
            Err(position) => {
                list.insert(position, strategy.strategy);
                Ok(true)
            }
        }
    }

    /// Remove `strategy`. Returns `false` if it is not present or if it is the last
    /// strategy of its player (a player always keeps at least one strategy).
    pub fn remove_strategy(&mut self, strategy: StrategyId) -> Result<bool, InvalidArgument> {
        self.ensure_known(strategy)?;
        let list = &mut self.strategies[strategy.player];
        match list.binary_search(&strategy.strategy) {
            Ok(position) if list.len() > 1 => {
                list.remove(position);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn is_subset_of(&self, other: &StrategySupport) -> Result<bool, InvalidArgument> {
        if !self.same_game(other) {
            return Err(InvalidArgument::ForeignGame);
        }
        Ok(self.iter().all(|strategy| other.contains(strategy)))
    }

    pub(crate) fn ensure_player(&self, player: usize) -> Result<(), InvalidArgument> {
        if player < self.strategies.len() {
            Ok(())
        } else {
            Err(InvalidArgument::UnknownPlayer(player))
        }
    }

    fn ensure_known(&self, strategy: StrategyId) -> Result<(), InvalidArgument> {
        if self.game.contains_strategy(strategy) {
            Ok(())
        } else {
            Err(InvalidArgument::UnknownStrategy(strategy))
        }
    }
}

impl SupportSize for StrategySupport {
    fn num_degrees_of_freedom(&self) -> usize {
        self.strategies
            .iter()
            .map(|it| it.len().saturating_sub(1))
            .sum()
    }
}

impl PartialEq for StrategySupport {
    fn eq(&self, other: &Self) -> bool {
        self.same_game(other) && self.strategies == other.strategies
    }
}

impl Eq for StrategySupport {}

impl Display for StrategySupport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for player in 0..self.strategies.len() {
            if player > 0 {
                write!(f, ";")?;
            }
            let labels: Vec<&str> = self
                .strategy_ids(player)
                .map(|s| self.game.strategy_label(s))
                .collect();
            write!(f, " p{}[{}]", player, labels.join(" "))?;
        }
        write!(f, " }}")
    }
}
