//! The game model consumed by the search and elimination algorithms.
//!
//! The algorithms only ever read the game: an [`ExtensiveGame`] is a tree of decision,
//! chance and terminal nodes grouped into information sets, a [`NormalGame`] is a payoff
//! table indexed by pure strategy profiles. All payoffs are exact rationals ([`Payoff`]);
//! nothing in this crate compares payoffs with a tolerance.

mod error;
mod extensive;
mod ids;
mod normal;


pub use error::{GameError, InvalidArgument};
pub use extensive::{ExtensiveGame, NodeKind};
pub use ids::{ActionId, InfosetId, NodeId, StrategyId};
pub use normal::NormalGame;

/// The exact number type used for payoffs and chance probabilities.
pub type Payoff = num_rational::BigRational;
