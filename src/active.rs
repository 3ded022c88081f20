use crate::cursor::CanonicalCursor;
use crate::dominance::behavior::{dominates_unchecked, is_dominated_unchecked};
use crate::game::{ActionId, ExtensiveGame, InfosetId, InvalidArgument, NodeId, NodeKind};
use crate::support::BehaviorSupport;

/// A [`BehaviorSupport`] together with the set of nodes and information sets that are
/// reachable ("active") under it.
///
/// A node is active if every player action on its path from the root belongs to the
/// support (chance moves are always followed). An information set is active if at least
/// one of its members is active. Both are updated incrementally by
/// [`ActiveSupport::remove_action`] and [`ActiveSupport::add_action`], which only touch
/// the subtrees below the affected action.
#[derive(Clone, Debug)]
pub struct ActiveSupport {
    support: BehaviorSupport,
    node_active: Vec<bool>,
    active_members: Vec<Vec<usize>>,
}

impl From<BehaviorSupport> for ActiveSupport {
    fn from(value: BehaviorSupport) -> Self {
        ActiveSupport::new(value)
    }
}

impl From<&BehaviorSupport> for ActiveSupport {
    fn from(value: &BehaviorSupport) -> Self {
        ActiveSupport::new(value.clone())
    }
}

impl ActiveSupport {
    pub fn new(support: BehaviorSupport) -> ActiveSupport {
        let game = support.game();
        let mut node_active = vec![false; game.num_nodes()];
        let mut active_members: Vec<Vec<usize>> = (0..game.num_players())
            .map(|player| vec![0; game.num_infosets(player)])
            .collect();
        for node in support.reachable_nodes_from(game.root()) {
            node_active[node.0] = true;
            if let NodeKind::Decision(infoset) = game.node_kind(node) {
                active_members[infoset.player][infoset.index] += 1;
            }
        }
        ActiveSupport {
            support,
            node_active,
            active_members,
        }
    }

    pub fn support(&self) -> &BehaviorSupport {
        &self.support
    }

    pub fn into_support(self) -> BehaviorSupport {
        self.support
    }

    pub fn game(&self) -> &ExtensiveGame {
        self.support.game()
    }

    pub fn contains(&self, action: ActionId) -> bool {
        self.support.contains(action)
    }

    pub fn num_actions(&self, infoset: InfosetId) -> usize {
        self.support.num_actions(infoset)
    }

    pub fn infoset_is_active(&self, infoset: InfosetId) -> bool {
        self.active_members[infoset.player][infoset.index] > 0
    }

    pub fn node_is_active(&self, node: NodeId) -> bool {
        self.node_active[node.0]
    }

    /// Remove `action` and return the information sets that became inactive as a result
    /// (in canonical order). Removing an absent action changes nothing.
    pub fn remove_action(&mut self, action: ActionId) -> Result<Vec<InfosetId>, InvalidArgument> {
        if !self.game().contains_action(action) {
            return Err(InvalidArgument::UnknownAction(action));
        }
        Ok(self.remove(action))
    }

    /// Add `action` and return the information sets that became active as a result
    /// (in canonical order). Adding a present action changes nothing.
    pub fn add_action(&mut self, action: ActionId) -> Result<Vec<InfosetId>, InvalidArgument> {
        if !self.game().contains_action(action) {
            return Err(InvalidArgument::UnknownAction(action));
        }
        Ok(self.insert(action))
    }

    /// True if every active information set keeps at least one action, i.e. the support
    /// describes a complete (partial) strategy profile and domination can be tested.
    pub fn has_active_actions_at_active_infosets(&self) -> bool {
        self.game()
            .infosets()
            .all(|infoset| !self.infoset_is_active(infoset) || self.num_actions(infoset) > 0)
    }

    /// True if the active information sets are exactly those with actions.
    pub fn has_active_actions_at_active_infosets_and_no_others(&self) -> bool {
        self.game()
            .infosets()
            .all(|infoset| self.infoset_is_active(infoset) == (self.num_actions(infoset) > 0))
    }

    /// True if `infoset` stays active in every branch that keeps the actions already
    /// passed by `cursor`.
    ///
    /// Some member of the infoset must be connected to the root by a path where every
    /// player action is supported and precedes the cursor. A chance move carries no such
    /// action, so a path through a chance node does not count.
    pub fn guaranteed_active_by_prior_commitments(
        &self,
        cursor: &CanonicalCursor<ActionId>,
        infoset: InfosetId,
    ) -> bool {
        let game = self.game();
        for member in game.members(infoset) {
            let mut current = *member;
            loop {
                let Some(parent) = game.parent(current) else {
                    return true;
                };
                match game.prior_action(current) {
                    None => break,
                    Some(prior) if self.contains(prior) && cursor.is_subsequent_to(prior) => {
                        current = parent
                    }
                    Some(_) => break,
                }
            }
        }
        false
    }

    /// See [`crate::dominance::dominates_action`].
    pub fn dominates(
        &self,
        a: ActionId,
        b: ActionId,
        strong: bool,
        conditional: bool,
    ) -> Result<bool, InvalidArgument> {
        crate::dominance::dominates_action(&self.support, a, b, strong, conditional)
    }

    /// See [`crate::dominance::is_action_dominated`].
    pub fn is_dominated(
        &self,
        action: ActionId,
        strong: bool,
        conditional: bool,
    ) -> Result<bool, InvalidArgument> {
        crate::dominance::is_action_dominated(&self.support, action, strong, conditional)
    }

    pub(crate) fn dominates_unchecked(
        &self,
        a: ActionId,
        b: ActionId,
        strong: bool,
        conditional: bool,
    ) -> bool {
        dominates_unchecked(&self.support, a, b, strong, conditional)
    }

    pub(crate) fn is_dominated_unchecked(
        &self,
        action: ActionId,
        strong: bool,
        conditional: bool,
    ) -> bool {
        is_dominated_unchecked(&self.support, action, strong, conditional)
    }

    pub(crate) fn remove(&mut self, action: ActionId) -> Vec<InfosetId> {
        if !self.support.remove(action) {
            return Vec::new();
        }
        let mut deactivated = Vec::new();
        for child in self.active_children(action) {
            self.deactivate(child, &mut deactivated);
        }
        deactivated.sort();
        deactivated
    }

    pub(crate) fn insert(&mut self, action: ActionId) -> Vec<InfosetId> {
        if !self.support.insert(action) {
            return Vec::new();
        }
        let mut activated = Vec::new();
        for child in self.active_children(action) {
            self.activate(child, &mut activated);
        }
        activated.sort();
        activated
    }

    /// Children reached by `action` from the active members of its infoset.
    fn active_children(&self, action: ActionId) -> Vec<NodeId> {
        let game = self.support.game();
        game.members(action.infoset())
            .iter()
            .filter(|member| self.node_active[member.0])
            .map(|member| game.child(*member, action.action))
            .collect()
    }

    fn deactivate(&mut self, start: NodeId, deactivated: &mut Vec<InfosetId>) {
        let game = self.support.game();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !self.node_active[node.0] {
                continue;
            }
            self.node_active[node.0] = false;
            if let NodeKind::Decision(infoset) = game.node_kind(node) {
                let count = &mut self.active_members[infoset.player][infoset.index];
                *count -= 1;
                if *count == 0 {
                    deactivated.push(*infoset);
                }
            }
            // Unfollowed children are already inactive and get skipped above.
            stack.extend(game.children(node));
        }
    }

    fn activate(&mut self, start: NodeId, activated: &mut Vec<InfosetId>) {
        let game = self.support.game();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if self.node_active[node.0] {
                continue;
            }
            self.node_active[node.0] = true;
            match game.node_kind(node) {
                NodeKind::Terminal => {}
                NodeKind::Decision(infoset) => {
                    let count = &mut self.active_members[infoset.player][infoset.index];
                    *count += 1;
                    if *count == 1 {
                        activated.push(*infoset);
                    }
                    stack.extend(
                        self.support
                            .actions(*infoset)
                            .map(|a| game.child(node, a.action)),
                    );
                }
                NodeKind::Chance(_) => stack.extend(game.children(node)),
            }
        }
    }
}
