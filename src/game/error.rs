use crate::game::{ActionId, InfosetId, NodeId, StrategyId};
use std::fmt::{Display, Formatter};

/// Errors raised while building or validating a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    UnknownPlayer(usize),
    UnknownInfoset(InfosetId),
    UnknownNode(NodeId),
    /// Children can only be appended to a terminal node.
    NodeAlreadyExpanded(NodeId),
    /// An information set needs at least one action.
    NoActions(InfosetId),
    /// Chance probabilities must be non-negative and sum to one.
    InvalidProbabilities(NodeId),
    /// A payoff vector must have one entry per player.
    PayoffLength { expected: usize, found: usize },
    /// A strategy profile must have one valid entry per player.
    InvalidProfile(Vec<usize>),
    /// The arena is not a well-formed tree (reported by `check`).
    Malformed(String),
}

/// A precondition violation: a support or identifier does not belong to the game it is
/// used with, or two objects that must be comparable are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    ForeignGame,
    UnknownAction(ActionId),
    UnknownStrategy(StrategyId),
    UnknownPlayer(usize),
    DifferentInfosets(ActionId, ActionId),
    DifferentPlayers(StrategyId, StrategyId),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnknownPlayer(player) => write!(f, "Unknown player `{player}`"),
            GameError::UnknownInfoset(infoset) => write!(f, "Unknown infoset `{infoset}`"),
            GameError::UnknownNode(node) => write!(f, "Unknown node `{node}`"),
            GameError::NodeAlreadyExpanded(node) => {
                write!(f, "Node `{node}` already has children")
            }
            GameError::NoActions(infoset) => write!(f, "Infoset `{infoset}` has no actions"),
            GameError::InvalidProbabilities(node) => {
                write!(f, "Chance probabilities at `{node}` are not a distribution")
            }
            GameError::PayoffLength { expected, found } => {
                write!(f, "Expected {expected} payoffs, found {found}")
            }
            GameError::InvalidProfile(profile) => write!(f, "Invalid profile {profile:?}"),
            GameError::Malformed(message) => write!(f, "Malformed game: {message}"),
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgument::ForeignGame => write!(f, "Supports belong to different games"),
            InvalidArgument::UnknownAction(action) => {
                write!(f, "Action `{action}` does not belong to the game")
            }
            InvalidArgument::UnknownStrategy(strategy) => {
                write!(f, "Strategy `{strategy}` does not belong to the game")
            }
            InvalidArgument::UnknownPlayer(player) => {
                write!(f, "Player `{player}` does not belong to the game")
            }
            InvalidArgument::DifferentInfosets(a, b) => {
                write!(f, "Actions `{a}` and `{b}` belong to different infosets")
            }
            InvalidArgument::DifferentPlayers(a, b) => {
                write!(f, "Strategies `{a}` and `{b}` belong to different players")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl std::error::Error for InvalidArgument {}
