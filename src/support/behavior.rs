use crate::game::{ActionId, ExtensiveGame, InfosetId, InvalidArgument, NodeId, NodeKind};
use crate::support::SupportSize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A subset of the actions of an [`ExtensiveGame`], stored per player and information set.
///
/// The support holds a shared, read-only handle to its game; two supports are equal only
/// if they refer to the very same game object (not merely an equal one) and contain the
/// same actions.
#[derive(Clone, Debug)]
pub struct BehaviorSupport {
    game: Arc<ExtensiveGame>,
    actions: Vec<Vec<BTreeSet<usize>>>,
}

impl BehaviorSupport {
    /// The support containing every action of `game`.
    pub fn full(game: &Arc<ExtensiveGame>) -> BehaviorSupport {
        let actions = (0..game.num_players())
            .map(|player| {
                (0..game.num_infosets(player))
                    .map(|index| (0..game.num_actions(InfosetId::new(player, index))).collect())
                    .collect()
            })
            .collect();
        BehaviorSupport {
            game: game.clone(),
            actions,
        }
    }

    /// The support containing no action of `game`.
    pub fn empty(game: &Arc<ExtensiveGame>) -> BehaviorSupport {
        let actions = (0..game.num_players())
            .map(|player| vec![BTreeSet::new(); game.num_infosets(player)])
            .collect();
        BehaviorSupport {
            game: game.clone(),
            actions,
        }
    }

    pub fn game(&self) -> &ExtensiveGame {
        &self.game
    }

    pub fn game_handle(&self) -> &Arc<ExtensiveGame> {
        &self.game
    }

    /// True if both supports refer to the same game object.
    pub fn same_game(&self, other: &BehaviorSupport) -> bool {
        Arc::ptr_eq(&self.game, &other.game)
    }

    pub fn contains(&self, action: ActionId) -> bool {
        self.actions
            .get(action.player)
            .and_then(|sets| sets.get(action.infoset))
            .is_some_and(|set| set.contains(&action.action))
    }

    /// Add `action` to the support. Returns `false` if it was already present.
    pub fn add_action(&mut self, action: ActionId) -> Result<bool, InvalidArgument> {
        self.ensure_known(action)?;
        Ok(self.insert(action))
    }

    /// Remove `action` from the support. Returns `false` if it was not present.
    pub fn remove_action(&mut self, action: ActionId) -> Result<bool, InvalidArgument> {
        self.ensure_known(action)?;
        Ok(self.remove(action))
    }

    /// Number of supported actions at `infoset` (zero for unknown infosets).
    pub fn num_actions(&self, infoset: InfosetId) -> usize {
        self.actions
            .get(infoset.player)
            .and_then(|sets| sets.get(infoset.index))
            .map(|set| set.len())
            .unwrap_or(0)
    }

    /// Supported actions at `infoset` in canonical order.
    pub fn actions(&self, infoset: InfosetId) -> impl Iterator<Item = ActionId> + '_ {
        self.actions
            .get(infoset.player)
            .and_then(|sets| sets.get(infoset.index))
            .into_iter()
            .flat_map(move |set| set.iter().map(move |a| infoset.action(*a)))
    }

    /// All supported actions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.actions.iter().enumerate().flat_map(|(player, sets)| {
            sets.iter().enumerate().flat_map(move |(infoset, set)| {
                set.iter()
                    .map(move |action| ActionId::new(player, infoset, *action))
            })
        })
    }

    /// Total number of supported actions.
    pub fn len(&self) -> usize {
        self.actions.iter().flatten().map(|set| set.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.iter().flatten().all(|set| set.is_empty())
    }

    /// Nodes reachable from `start` when players only use supported actions (chance
    /// moves are always followed). Includes `start`.
    pub fn reachable_nodes_from(&self, start: NodeId) -> Vec<NodeId> {
        let game = self.game();
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            result.push(node);
            match game.node_kind(node) {
                NodeKind::Terminal => {}
                NodeKind::Decision(infoset) => {
                    stack.extend(self.actions(*infoset).map(|a| game.child(node, a.action)));
                }
                NodeKind::Chance(_) => stack.extend(game.children(node)),
            }
        }
        result
    }

    /// Information sets with at least one member reachable from `start`.
    pub fn reachable_infosets_from(&self, start: NodeId) -> BTreeSet<InfosetId> {
        let game = self.game();
        self.reachable_nodes_from(start)
            .into_iter()
            .filter_map(|node| match game.node_kind(node) {
                NodeKind::Decision(infoset) => Some(*infoset),
                _ => None,
            })
            .collect()
    }

    /// Information sets reachable from the root.
    pub fn reachable_infosets(&self) -> BTreeSet<InfosetId> {
        self.reachable_infosets_from(self.game.root())
    }

    /// Members of `infoset` that are reachable from the root.
    pub fn reachable_members(&self, infoset: InfosetId) -> Vec<NodeId> {
        let reachable: BTreeSet<NodeId> = self
            .reachable_nodes_from(self.game.root())
            .into_iter()
            .collect();
        self.game
            .members(infoset)
            .iter()
            .filter(|node| reachable.contains(node))
            .copied()
            .collect()
    }

    /// True if every action of this support also belongs to `other`.
    pub fn is_subset_of(&self, other: &BehaviorSupport) -> Result<bool, InvalidArgument> {
        if !self.same_game(other) {
            return Err(InvalidArgument::ForeignGame);
        }
        Ok(self.iter().all(|action| other.contains(action)))
    }

    pub(crate) fn insert(&mut self, action: ActionId) -> bool {
        self.actions[action.player][action.infoset].insert(action.action)
    }

    pub(crate) fn remove(&mut self, action: ActionId) -> bool {
        self.actions[action.player][action.infoset].remove(&action.action)
    }

    fn ensure_known(&self, action: ActionId) -> Result<(), InvalidArgument> {
        if self.game.contains_action(action) {
            Ok(())
        } else {
            Err(InvalidArgument::UnknownAction(action))
        }
    }
}

impl SupportSize for BehaviorSupport {
    /// Sum of `num_actions - 1` over the information sets reachable under this support.
    fn num_degrees_of_freedom(&self) -> usize {
        self.reachable_infosets()
            .into_iter()
            .map(|infoset| self.num_actions(infoset).saturating_sub(1))
            .sum()
    }
}

impl PartialEq for BehaviorSupport {
    fn eq(&self, other: &Self) -> bool {
        self.same_game(other) && self.actions == other.actions
    }
}

impl Eq for BehaviorSupport {}

impl Hash for BehaviorSupport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.actions.hash(state);
    }
}

impl Display for BehaviorSupport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let game = self.game();
        write!(f, "{{")?;
        let mut first = true;
        for infoset in game.infosets() {
            if !first {
                write!(f, ";")?;
            }
            first = false;
            let labels: Vec<&str> = self.actions(infoset).map(|a| game.action_label(a)).collect();
            write!(f, " {}[{}]", infoset, labels.join(" "))?;
        }
        write!(f, " }}")
    }
}
