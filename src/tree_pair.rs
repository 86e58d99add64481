//! Two path trees grown in lockstep towards each other.
//!
//! The source tree is rooted at one hub, the target tree at another. Both grow one
//! depth layer per round, source first. Neither tree may claim a hub owned by the
//! other one or used by a recorded connection, so whenever a frontier node touches
//! the other tree the two root paths form a new vertex-disjoint connection. The
//! trunks carrying it are stripped from both trees and growth goes on.

use crate::Hub;
use crate::error::{BisectError, Result};
use crate::network::Network;
use crate::tree_blocks::connection::{Connection, ConnectionRegistry};
use crate::tree_blocks::path_tree::{Contact, PathTree};
use tracing::debug;

/// Result of one [`TreePair::grow_one_layer`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerOutcome {
    /// Some hub was claimed by either tree.
    pub grew: bool,
    /// Some connection was recorded.
    pub connected: bool,
}

impl LayerOutcome {
    pub fn is_idle(&self) -> bool {
        !self.grew && !self.connected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Source,
    Target,
}

/// Source tree, target tree and the connections found between them.
#[derive(Debug, Clone)]
pub struct TreePair<'a> {
    network: &'a Network,
    source: PathTree,
    target: PathTree,
    registry: ConnectionRegistry,
    rounds: usize,
    exhausted: bool,
}

impl<'a> TreePair<'a> {
    /// Plants both trees and records the connections needing no growth: the direct
    /// link between the roots and every peer the roots share.
    ///
    /// Panics if `source == target`.
    pub fn new(network: &'a Network, source: Hub, target: Hub) -> Self {
        assert_ne!(source, target, "a tree pair needs two distinct roots");
        let hub_count = network.hub_count();
        let mut pair = Self {
            network,
            source: PathTree::new(source, hub_count),
            target: PathTree::new(target, hub_count),
            registry: ConnectionRegistry::new(source, target, hub_count),
            rounds: 0,
            exhausted: false,
        };

        if network.are_peers(source, target) {
            debug!("roots are peers");
            pair.record(vec![source, target]);
        }
        let shared: Vec<Hub> = network
            .peers(source)
            .filter(|&peer| network.are_peers(peer, target))
            .collect();
        for peer in shared {
            pair.record(vec![source, peer, target]);
        }

        pair
    }

    fn record(&mut self, hubs: Vec<Hub>) {
        let connection = self.registry.register(Connection::new(hubs));
        debug!(
            connection = %connection.display(self.network),
            count = self.registry.len(),
            "recorded connection"
        );
    }

    fn tree(&self, side: Side) -> &PathTree {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    fn tree_mut(&mut self, side: Side) -> &mut PathTree {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }

    fn strip(&mut self, side: Side, trunk: Option<usize>) {
        let Some(trunk) = trunk else {
            return;
        };
        let released = self.tree_mut(side).strip(trunk);
        debug!(side = ?side, released = released.len(), "stripped trunk");
    }

    /// Turns a contact found by the `side` tree into a connection.
    ///
    /// Contacts go stale when an earlier contact of the same round stripped one of
    /// their nodes; those are skipped and `false` is returned.
    fn resolve(&mut self, side: Side, contact: Contact) -> bool {
        let other = match side {
            Side::Source => Side::Target,
            Side::Target => Side::Source,
        };
        let (grower, lover) = (self.tree(side), self.tree(other));
        if !grower.is_live(contact.node) || !lover.is_live(contact.peer) {
            return false;
        }

        let mut hubs = grower.path(contact.node);
        hubs.extend(lover.path(contact.peer).into_iter().rev());
        if side == Side::Target {
            hubs.reverse();
        }
        let grower_trunk = grower.node(contact.node).trunk(contact.node);
        let lover_trunk = lover.node(contact.peer).trunk(contact.peer);

        self.record(hubs);
        self.strip(side, grower_trunk);
        self.strip(other, lover_trunk);
        true
    }

    /// Grows the source tree by one round, resolves its contacts, then does the same
    /// for the target tree.
    pub fn grow_one_layer(&mut self) -> LayerOutcome {
        let mut outcome = LayerOutcome::default();

        for side in [Side::Source, Side::Target] {
            let growth = match side {
                Side::Source => {
                    self.source
                        .grow_round(self.network, self.registry.consumed(), &self.target)
                }
                Side::Target => {
                    self.target
                        .grow_round(self.network, self.registry.consumed(), &self.source)
                }
            };
            outcome.grew |= !growth.claimed.is_empty();
            for contact in growth.contacts {
                outcome.connected |= self.resolve(side, contact);
            }
        }

        self.rounds += 1;
        if outcome.is_idle() {
            self.exhausted = true;
        }
        outcome
    }

    /// Grows layers until the pair is exhausted or holds more than `stop_above`
    /// connections. Returns the connection count.
    ///
    /// Fails with [`BisectError::NonConvergent`] after `max_rounds` layers.
    pub fn run(&mut self, stop_above: Option<usize>, max_rounds: usize) -> Result<usize> {
        while !self.exhausted {
            if stop_above.is_some_and(|limit| self.registry.len() > limit) {
                break;
            }
            if self.rounds >= max_rounds {
                return Err(BisectError::NonConvergent {
                    from: self.network.name(self.source.root()).to_string(),
                    to: self.network.name(self.target.root()).to_string(),
                    rounds: self.rounds,
                });
            }
            self.grow_one_layer();
        }
        Ok(self.registry.len())
    }

    pub fn connections(&self) -> &[Connection] {
        self.registry.connections()
    }

    pub fn count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn source_tree(&self) -> &PathTree {
        &self.source
    }

    pub fn target_tree(&self) -> &PathTree {
        &self.target
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_connections(self) -> Vec<Connection> {
        self.registry.into_connections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_graphs::random_network;
    use crate::testing::shapes::{SAMPLE, TRIANGLE_WITH_PENDANT, TWIN_CLIQUES};
    use crate::input::from_str;
    use hashbrown::HashSet;

    fn grown<'a>(network: &'a Network, a: &str, b: &str) -> TreePair<'a> {
        let mut pair = TreePair::new(network, network.hub(a).unwrap(), network.hub(b).unwrap());
        pair.run(None, 1000).unwrap();
        pair
    }

    fn assert_disjoint(pair: &TreePair) {
        let mut used = HashSet::new();
        for connection in pair.connections() {
            assert_eq!(connection.source(), pair.source_tree().root());
            assert_eq!(connection.target(), pair.target_tree().root());
            for window in connection.hubs().windows(2) {
                assert!(pair.network().are_peers(window[0], window[1]));
            }
            for &hub in connection.interior() {
                assert!(used.insert(hub), "hub {:?} shared by two connections", hub);
            }
        }
    }

    #[test]
    fn test_pendant_has_one_connection() {
        let network = from_str(TRIANGLE_WITH_PENDANT).unwrap();
        let pair = grown(&network, "a", "d");
        assert_eq!(pair.count(), 1);
        assert!(pair.is_exhausted());
        let c = network.hub("c").unwrap();
        assert_eq!(pair.connections()[0].interior(), &[c]);
        assert_disjoint(&pair);
    }

    #[test]
    fn test_triangle_pair() {
        let network = from_str(TRIANGLE_WITH_PENDANT).unwrap();
        let pair = grown(&network, "a", "b");
        assert_eq!(pair.count(), 2);
        assert!(pair.connections()[0].is_direct());
        assert_disjoint(&pair);
    }

    #[test]
    fn test_twin_cliques_across_the_cut() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        for (a, b) in [("a1", "b1"), ("a4", "b4"), ("a4", "b2"), ("b3", "a2")] {
            let pair = grown(&network, a, b);
            assert_eq!(pair.count(), 3, "pair {} {}", a, b);
            assert_disjoint(&pair);
        }
    }

    #[test]
    fn test_twin_cliques_same_side() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        for (a, b) in [("a1", "a2"), ("b2", "b3"), ("a3", "a1")] {
            let pair = grown(&network, a, b);
            assert!(pair.count() >= 4, "pair {} {}", a, b);
            assert_disjoint(&pair);
        }
    }

    #[test]
    fn test_roots_settle_before_growth() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        let pair = TreePair::new(&network, network.hub("a1").unwrap(), network.hub("a2").unwrap());
        assert_eq!(pair.rounds(), 0);
        // direct link plus the shared peers a3 and a4
        assert_eq!(pair.count(), 3);
        assert!(pair.connections()[0].is_direct());
        assert!(pair.connections()[1..].iter().all(|c| c.interior().len() == 1));
    }

    #[test]
    fn test_isolated_hub_has_no_connections() {
        let network = from_str(&format!("{}e:\n", TRIANGLE_WITH_PENDANT)).unwrap();
        let pair = grown(&network, "a", "e");
        assert_eq!(pair.count(), 0);
        let pair = grown(&network, "e", "d");
        assert_eq!(pair.count(), 0);
    }

    #[test]
    fn test_stop_above_cuts_growth_short() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        let mut pair = TreePair::new(&network, network.hub("a4").unwrap(), network.hub("b4").unwrap());
        let count = pair.run(Some(0), 1000).unwrap();
        assert!(count > 0);
        assert!(!pair.is_exhausted());
    }

    #[test]
    fn test_round_guard() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        let mut pair = TreePair::new(&network, network.hub("a4").unwrap(), network.hub("b4").unwrap());
        let result = pair.run(None, 1);
        assert!(matches!(
            result,
            Err(BisectError::NonConvergent { rounds: 1, .. })
        ));
    }

    #[test]
    fn test_layers_alternate_and_strip() {
        let network = from_str(TWIN_CLIQUES).unwrap();
        let mut pair = TreePair::new(&network, network.hub("a4").unwrap(), network.hub("b4").unwrap());

        let first = pair.grow_one_layer();
        assert!(first.grew);
        assert!(!first.connected);
        assert_eq!(pair.source_tree().trunks().len(), 3);
        assert_eq!(pair.target_tree().trunks().len(), 3);

        let second = pair.grow_one_layer();
        assert!(second.connected);
        assert_eq!(pair.count(), 3);
        assert!(pair.source_tree().trunks().is_empty());
        assert!(pair.target_tree().trunks().is_empty());

        assert!(pair.grow_one_layer().is_idle());
        assert!(pair.is_exhausted());
    }

    #[test]
    fn test_deterministic() {
        let network = from_str(SAMPLE).unwrap();
        let first = grown(&network, "jqt", "rzs");
        let second = grown(&network, "jqt", "rzs");
        assert_eq!(first.connections(), second.connections());
    }

    #[test]
    fn test_random_networks_stay_disjoint() {
        for i in 0..60 {
            let n = 4 + i / 3;
            let network = random_network(n, n + 2 * i, i);
            let hubs: Vec<Hub> = network.hubs().collect();
            for &target in &hubs[1..] {
                let mut pair = TreePair::new(&network, hubs[0], target);
                pair.run(None, 10_000).unwrap();
                assert!(pair.is_exhausted());
                assert_disjoint(&pair);
            }
        }
    }
}
