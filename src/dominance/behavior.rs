use crate::dominance::Comparison;
use crate::dominance::contingency::Contingencies;
use crate::game::{ActionId, ExtensiveGame, InfosetId, InvalidArgument, NodeId, NodeKind, Payoff};
use crate::support::BehaviorSupport;
use std::collections::BTreeSet;

/// Test whether action `a` dominates action `b` (both at the same information set) for
/// the player owning that information set, given the opponents' (and the player's own
/// other) choices allowed by `support`.
///
/// With `conditional == false`, the expected payoff of the whole game is compared, with the
/// information set forced to `a` resp. `b`. With `conditional == true`, the comparison
/// only looks at the subtrees below each (reachable) member of the information set.
///
/// `strong` domination requires a strictly better payoff in every contingency, weak
/// domination a payoff that is never worse and better at least once.
pub fn dominates_action(
    support: &BehaviorSupport,
    a: ActionId,
    b: ActionId,
    strong: bool,
    conditional: bool,
) -> Result<bool, InvalidArgument> {
    let game = support.game();
    for action in [a, b] {
        if !game.contains_action(action) {
            return Err(InvalidArgument::UnknownAction(action));
        }
    }
    if a.infoset() != b.infoset() {
        return Err(InvalidArgument::DifferentInfosets(a, b));
    }
    Ok(dominates_unchecked(support, a, b, strong, conditional))
}

/// True if some other supported action at the information set of `action` dominates it.
pub fn is_action_dominated(
    support: &BehaviorSupport,
    action: ActionId,
    strong: bool,
    conditional: bool,
) -> Result<bool, InvalidArgument> {
    if !support.game().contains_action(action) {
        return Err(InvalidArgument::UnknownAction(action));
    }
    Ok(is_dominated_unchecked(support, action, strong, conditional))
}

pub(crate) fn is_dominated_unchecked(
    support: &BehaviorSupport,
    action: ActionId,
    strong: bool,
    conditional: bool,
) -> bool {
    support
        .actions(action.infoset())
        .filter(|other| *other != action)
        .any(|other| dominates_unchecked(support, other, action, strong, conditional))
}

pub(crate) fn dominates_unchecked(
    support: &BehaviorSupport,
    a: ActionId,
    b: ActionId,
    strong: bool,
    conditional: bool,
) -> bool {
    let infoset = a.infoset();
    // Compared actions need not be supported; their subtrees are explored anyway.
    let mut extended = support.clone();
    extended.insert(a);
    extended.insert(b);

    let mut comparison = Comparison::new(strong);
    if conditional {
        let mut members = support.reachable_members(infoset);
        if members.is_empty() {
            members = support.game().members(infoset).to_vec();
        }
        for member in members {
            let game = extended.game();
            let (child_a, child_b) = (game.child(member, a.action), game.child(member, b.action));
            let mut slots = extended.reachable_infosets_from(child_a);
            slots.extend(extended.reachable_infosets_from(child_b));
            let profile = ProfileIterator::new(&extended, slots, infoset);
            if !profile.compare(&mut comparison, child_a, child_b, a, b) {
                return false;
            }
        }
    } else {
        let root = extended.game().root();
        let slots = extended.reachable_infosets();
        let profile = ProfileIterator::new(&extended, slots, infoset);
        if !profile.compare(&mut comparison, root, root, a, b) {
            return false;
        }
    }
    comparison.verdict()
}

/// Pure behaviour profiles over a set of information sets, with one information set
/// (the one being compared) left to be forced by the caller.
struct ProfileIterator<'a> {
    support: &'a BehaviorSupport,
    slots: Vec<InfosetId>,
    contingencies: Contingencies,
}

impl<'a> ProfileIterator<'a> {
    fn new(
        support: &'a BehaviorSupport,
        mut slots: BTreeSet<InfosetId>,
        compared: InfosetId,
    ) -> ProfileIterator<'a> {
        slots.remove(&compared);
        let slots: Vec<InfosetId> = slots.into_iter().collect();
        let options = slots
            .iter()
            .map(|infoset| support.actions(*infoset).map(|a| a.action).collect())
            .collect();
        ProfileIterator {
            support,
            slots,
            contingencies: Contingencies::new(options),
        }
    }

    /// Feed the payoffs of `a` (from `start_a`) and `b` (from `start_b`) in every
    /// contingency into `comparison`. Returns `false` on the first counter-example.
    fn compare(
        mut self,
        comparison: &mut Comparison,
        start_a: NodeId,
        start_b: NodeId,
        a: ActionId,
        b: ActionId,
    ) -> bool {
        let game = self.support.game();
        let player = a.player;
        loop {
            let payoff_a = self.expected_payoff(game, start_a, player, a);
            let payoff_b = self.expected_payoff(game, start_b, player, b);
            if !comparison.record(&payoff_a, &payoff_b) {
                return false;
            }
            if !self.contingencies.advance() {
                return true;
            }
        }
    }

    fn choice(&self, infoset: InfosetId, forced: ActionId) -> Option<usize> {
        if infoset == forced.infoset() {
            return Some(forced.action);
        }
        self.slots
            .binary_search(&infoset)
            .ok()
            .and_then(|slot| self.contingencies.choice(slot))
    }

    /// Expected payoff of `player` in the subtree rooted at `node`, accumulating outcomes
    /// along the path. A decision node without a choice ends the play.
    fn expected_payoff(
        &self,
        game: &ExtensiveGame,
        node: NodeId,
        player: usize,
        forced: ActionId,
    ) -> Payoff {
        let mut payoff = game.node_payoff(node, player);
        match game.node_kind(node) {
            NodeKind::Terminal => {}
            NodeKind::Decision(infoset) => {
                if let Some(action) = self.choice(*infoset, forced) {
                    payoff += self.expected_payoff(game, game.child(node, action), player, forced);
                }
            }
            NodeKind::Chance(probabilities) => {
                for (probability, child) in probabilities.iter().zip(game.children(node)) {
                    payoff += probability * self.expected_payoff(game, *child, player, forced);
                }
            }
        }
        payoff
    }
}
