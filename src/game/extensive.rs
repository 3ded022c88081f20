use crate::game::{ActionId, GameError, InfosetId, NodeId, Payoff};
use num_traits::{One, Signed, Zero};

/// An immutable (once built) extensive form game tree.
///
/// Nodes are stored in an arena indexed by [`NodeId`]; the root is always `NodeId(0)`.
/// Every decision node belongs to exactly one information set, and all members of an
/// information set offer the same number of actions. Any node (not only a terminal one)
/// can carry an outcome; payoffs accumulate along the played path. A node without an
/// outcome contributes zero to every player.
///
/// The game is built incrementally by expanding terminal nodes into decision or chance
/// nodes. Once the game is shared with a support (typically through an `Arc`), it is
/// treated as read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtensiveGame {
    players: Vec<String>,
    infosets: Vec<Vec<Infoset>>,
    nodes: Vec<Node>,
}

/// The role of a node in the game tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Terminal,
    Decision(InfosetId),
    /// A move of nature; the vector holds the probability of each child.
    Chance(Vec<Payoff>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Infoset {
    actions: Vec<String>,
    members: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node {
    parent: Option<NodeId>,
    /// Index of this node among the children of its parent.
    branch: usize,
    kind: NodeKind,
    children: Vec<NodeId>,
    outcome: Option<Vec<Payoff>>,
}

impl ExtensiveGame {
    /// Create a game consisting of a single terminal root node.
    pub fn new<S: ToString>(players: &[S]) -> ExtensiveGame {
        ExtensiveGame {
            players: players.iter().map(|it| it.to_string()).collect(),
            infosets: vec![Vec::new(); players.len()],
            nodes: vec![Node {
                parent: None,
                branch: 0,
                kind: NodeKind::Terminal,
                children: Vec::new(),
                outcome: None,
            }],
        }
    }

    /// Declare a new information set of `player` with the given action labels.
    pub fn add_infoset<S: ToString>(
        &mut self,
        player: usize,
        actions: &[S],
    ) -> Result<InfosetId, GameError> {
        let Some(infosets) = self.infosets.get_mut(player) else {
            return Err(GameError::UnknownPlayer(player));
        };
        let id = InfosetId::new(player, infosets.len());
        if actions.is_empty() {
            return Err(GameError::NoActions(id));
        }
        infosets.push(Infoset {
            actions: actions.iter().map(|it| it.to_string()).collect(),
            members: Vec::new(),
        });
        Ok(id)
    }

    /// Turn a terminal `node` into a member of `infoset`, creating one (terminal) child
    /// per action. Returns the children in action order.
    pub fn append_decision(
        &mut self,
        node: NodeId,
        infoset: InfosetId,
    ) -> Result<Vec<NodeId>, GameError> {
        self.ensure_expandable(node)?;
        let num_actions = self.infoset(infoset)?.actions.len();
        let children = self.push_children(node, num_actions);
        self.nodes[node.0].kind = NodeKind::Decision(infoset);
        self.infosets[infoset.player][infoset.index]
            .members
            .push(node);
        Ok(children)
    }

    /// Turn a terminal `node` into a chance node with one child per probability.
    pub fn append_chance(
        &mut self,
        node: NodeId,
        probabilities: Vec<Payoff>,
    ) -> Result<Vec<NodeId>, GameError> {
        self.ensure_expandable(node)?;
        if !is_distribution(&probabilities) {
            return Err(GameError::InvalidProbabilities(node));
        }
        let children = self.push_children(node, probabilities.len());
        self.nodes[node.0].kind = NodeKind::Chance(probabilities);
        Ok(children)
    }

    /// Attach an outcome (one payoff per player) to `node`.
    pub fn set_outcome(&mut self, node: NodeId, payoffs: Vec<Payoff>) -> Result<(), GameError> {
        if payoffs.len() != self.players.len() {
            return Err(GameError::PayoffLength {
                expected: self.players.len(),
                found: payoffs.len(),
            });
        }
        let Some(data) = self.nodes.get_mut(node.0) else {
            return Err(GameError::UnknownNode(node));
        };
        data.outcome = Some(payoffs);
        Ok(())
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player_name(&self, player: usize) -> &str {
        &self.players[player]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_infosets(&self, player: usize) -> usize {
        self.infosets.get(player).map(|it| it.len()).unwrap_or(0)
    }

    /// All information sets in canonical order.
    pub fn infosets(&self) -> impl Iterator<Item = InfosetId> + '_ {
        self.infosets
            .iter()
            .enumerate()
            .flat_map(|(player, sets)| (0..sets.len()).map(move |i| InfosetId::new(player, i)))
    }

    /// All actions of the game in canonical order.
    pub fn actions(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.infosets()
            .flat_map(|infoset| (0..self.num_actions(infoset)).map(move |a| infoset.action(a)))
    }

    /// Number of actions at `infoset`.
    ///
    /// # Panics
    ///
    /// Panics if `infoset` does not belong to this game.
    pub fn num_actions(&self, infoset: InfosetId) -> usize {
        self.infosets[infoset.player][infoset.index].actions.len()
    }

    pub fn action_label(&self, action: ActionId) -> &str {
        &self.infosets[action.player][action.infoset].actions[action.action]
    }

    /// Decision nodes belonging to `infoset`, in the order they were added.
    pub fn members(&self, infoset: InfosetId) -> &[NodeId] {
        &self.infosets[infoset.player][infoset.index].members
    }

    pub fn contains_infoset(&self, infoset: InfosetId) -> bool {
        infoset.player < self.infosets.len() && infoset.index < self.infosets[infoset.player].len()
    }

    pub fn contains_action(&self, action: ActionId) -> bool {
        self.contains_infoset(action.infoset()) && action.action < self.num_actions(action.infoset())
    }

    pub fn node_kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// The child of `node` reached by its `branch`-th action or chance move.
    pub fn child(&self, node: NodeId, branch: usize) -> NodeId {
        self.nodes[node.0].children[branch]
    }

    /// The player action leading into `node`, or `None` for the root and for children
    /// of chance nodes.
    pub fn prior_action(&self, node: NodeId) -> Option<ActionId> {
        let data = &self.nodes[node.0];
        let parent = data.parent?;
        match &self.nodes[parent.0].kind {
            NodeKind::Decision(infoset) => Some(infoset.action(data.branch)),
            _ => None,
        }
    }

    pub fn outcome(&self, node: NodeId) -> Option<&[Payoff]> {
        self.nodes[node.0].outcome.as_deref()
    }

    /// Payoff of `player` attached directly to `node` (zero if the node has no outcome).
    pub fn node_payoff(&self, node: NodeId, player: usize) -> Payoff {
        self.outcome(node)
            .map(|payoffs| payoffs[player].clone())
            .unwrap_or_else(Payoff::zero)
    }

    /// Verify that the arena describes a well-formed game tree.
    ///
    /// Games built through the builder methods are always well-formed; this is intended
    /// for games obtained by other means (e.g. deserialization).
    pub fn check(&self) -> Result<(), GameError> {
        let malformed = |message: String| Err(GameError::Malformed(message));
        if self.nodes.is_empty() {
            return malformed("no root node".to_string());
        }
        if self.infosets.len() != self.players.len() {
            return malformed("infoset table does not match players".to_string());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index);
            match node.parent {
                None if index != 0 => return malformed(format!("`{id}` has no parent")),
                Some(parent) if parent.0 >= index => {
                    return malformed(format!("`{id}` does not follow its parent"));
                }
                Some(parent) if self.nodes[parent.0].children.get(node.branch) != Some(&id) => {
                    return malformed(format!("`{id}` is not a child of its parent"));
                }
                _ => {}
            }
            for (branch, child) in node.children.iter().enumerate() {
                let Some(data) = self.nodes.get(child.0) else {
                    return Err(GameError::UnknownNode(id));
                };
                if data.parent != Some(id) || data.branch != branch {
                    return malformed(format!("`{child}` is listed as a child of `{id}`"));
                }
            }
            if let Some(payoffs) = &node.outcome
                && payoffs.len() != self.players.len()
            {
                return Err(GameError::PayoffLength {
                    expected: self.players.len(),
                    found: payoffs.len(),
                });
            }
            match &node.kind {
                NodeKind::Terminal if !node.children.is_empty() => {
                    return malformed(format!("terminal `{id}` has children"));
                }
                NodeKind::Decision(infoset) => {
                    let data = self.infoset(*infoset)?;
                    if data.actions.len() != node.children.len() {
                        return malformed(format!("`{id}` does not match actions of `{infoset}`"));
                    }
                    if !data.members.contains(&id) {
                        return malformed(format!("`{id}` is not a member of `{infoset}`"));
                    }
                }
                NodeKind::Chance(probabilities) => {
                    if probabilities.len() != node.children.len() || !is_distribution(probabilities)
                    {
                        return Err(GameError::InvalidProbabilities(id));
                    }
                }
                _ => {}
            }
        }
        for infoset in self.infosets() {
            let data = self.infoset(infoset)?;
            if data.actions.is_empty() {
                return Err(GameError::NoActions(infoset));
            }
            for (index, member) in data.members.iter().enumerate() {
                if data.members[..index].contains(member) {
                    return malformed(format!("`{member}` listed twice in `{infoset}`"));
                }
                let kind = self.nodes.get(member.0).map(|it| &it.kind);
                if kind != Some(&NodeKind::Decision(infoset)) {
                    return malformed(format!("`{member}` listed as a member of `{infoset}`"));
                }
            }
        }
        Ok(())
    }

    fn infoset(&self, infoset: InfosetId) -> Result<&Infoset, GameError> {
        self.infosets
            .get(infoset.player)
            .and_then(|sets| sets.get(infoset.index))
            .ok_or(GameError::UnknownInfoset(infoset))
    }

    fn ensure_expandable(&self, node: NodeId) -> Result<(), GameError> {
        let Some(data) = self.nodes.get(node.0) else {
            return Err(GameError::UnknownNode(node));
        };
        if data.kind != NodeKind::Terminal {
            return Err(GameError::NodeAlreadyExpanded(node));
        }
        Ok(())
    }

    fn push_children(&mut self, node: NodeId, count: usize) -> Vec<NodeId> {
        let children: Vec<NodeId> = (0..count)
            .map(|branch| {
                self.nodes.push(Node {
                    parent: Some(node),
                    branch,
                    kind: NodeKind::Terminal,
                    children: Vec::new(),
                    outcome: None,
                });
                NodeId(self.nodes.len() - 1)
            })
            .collect();
        self.nodes[node.0].children = children.clone();
        children
    }
}

fn is_distribution(probabilities: &[Payoff]) -> bool {
    !probabilities.is_empty()
        && probabilities.iter().all(|p| !p.is_negative())
        && probabilities.iter().sum::<Payoff>().is_one()
}
