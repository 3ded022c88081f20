use std::fmt::{Display, Formatter};

/// Index of a node in the arena of an [`crate::game::ExtensiveGame`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// An information set, identified by its player and its index among that player's
/// information sets.
///
/// The derived ordering is lexicographic on `(player, index)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfosetId {
    pub player: usize,
    pub index: usize,
}

/// An action of an extensive game.
///
/// The derived ordering is lexicographic on `(player, infoset, action)`. This is the
/// canonical order used by every search in this crate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId {
    pub player: usize,
    pub infoset: usize,
    pub action: usize,
}

/// A pure strategy of a normal form game, ordered lexicographically on `(player, strategy)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyId {
    pub player: usize,
    pub strategy: usize,
}

impl InfosetId {
    pub fn new(player: usize, index: usize) -> InfosetId {
        InfosetId { player, index }
    }

    /// The `action`-th action of this information set.
    pub fn action(&self, action: usize) -> ActionId {
        ActionId {
            player: self.player,
            infoset: self.index,
            action,
        }
    }
}

impl ActionId {
    pub fn new(player: usize, infoset: usize, action: usize) -> ActionId {
        ActionId {
            player,
            infoset,
            action,
        }
    }

    /// The information set at which this action is taken.
    pub fn infoset(&self) -> InfosetId {
        InfosetId {
            player: self.player,
            index: self.infoset,
        }
    }
}

impl StrategyId {
    pub fn new(player: usize, strategy: usize) -> StrategyId {
        StrategyId { player, strategy }
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl Display for InfosetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}:i{}", self.player, self.index)
    }
}

impl Display for ActionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}:i{}:a{}", self.player, self.infoset, self.action)
    }
}

impl Display for StrategyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}:s{}", self.player, self.strategy)
    }
}
