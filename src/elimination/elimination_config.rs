/// How many elimination passes to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EliminationDepth {
    /// A single pass over the selected players.
    #[default]
    OneLevel,
    /// Repeat passes until no further strategy (or action) is removed.
    Iterative,
}

/// A "flat" configuration object for iterated elimination of dominated strategies and
/// actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EliminationConfig {
    /// Eliminate only strongly dominated strategies (default: `false`, i.e. weak domination).
    pub strong: bool,
    /// Compare actions conditionally on reaching their information set (default: `true`).
    /// Ignored in normal form games.
    pub conditional: bool,
    /// The players whose strategies (or actions) are eliminated, in this order.
    ///
    /// # Panics
    ///
    /// The procedure is allowed to panic if this list contains players not valid in the
    /// eliminated game.
    pub players: Vec<usize>,
    /// Run a single pass or iterate to a fixpoint (default: [`EliminationDepth::OneLevel`]).
    pub depth: EliminationDepth,
    /// Cancel the procedure if it exceeds the specified number of passes (default:
    /// `usize::MAX`).
    pub max_iterations: usize,
}

impl From<usize> for EliminationConfig {
    fn from(value: usize) -> Self {
        EliminationConfig::new(value)
    }
}

impl From<&EliminationConfig> for EliminationConfig {
    fn from(value: &EliminationConfig) -> Self {
        value.clone()
    }
}

impl EliminationConfig {
    /// Create a new instance of [`EliminationConfig`] covering all players of a game with
    /// `num_players` players.
    pub fn new(num_players: usize) -> EliminationConfig {
        EliminationConfig {
            strong: false,
            conditional: true,
            players: (0..num_players).collect(),
            depth: EliminationDepth::default(),
            max_iterations: usize::MAX,
        }
    }
}
