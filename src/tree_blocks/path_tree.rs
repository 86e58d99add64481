use crate::Hub;
use crate::network::Network;
use crate::tree_blocks::path_node::{NodeId, NodeKind, PathNode, ROOT};
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use radsort::sort_by_key;
use tracing::trace;

/// A frontier node touching a hub that the peer tree already owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Frontier node of the growing tree.
    pub node: NodeId,
    /// Node of the peer tree owning the touched hub.
    pub peer: NodeId,
}

/// Outcome of one growth round of a single tree.
#[derive(Debug, Clone, Default)]
pub struct Growth {
    pub claimed: Vec<NodeId>,
    pub contacts: Vec<Contact>,
}

impl Growth {
    pub fn is_idle(&self) -> bool {
        self.claimed.is_empty() && self.contacts.is_empty()
    }
}

/// Path tree rooted at a single hub.
///
/// Nodes live in an arena and refer to each other by index. Stripped nodes stay in
/// the arena as tombstones so indices handed out earlier never dangle.
///
/// A hub occurs in at most one live node, tracked both as a bitset (cheap unions)
/// and as a hub to node map (contact lookups from the peer tree).
#[derive(Debug, Clone)]
pub struct PathTree {
    nodes: Vec<PathNode>,
    occupied: FixedBitSet,
    position: HashMap<Hub, NodeId>,
}

impl PathTree {
    /// `hub_count` sizes the occupied bitset, it has to cover every hub of the network.
    pub fn new(root: Hub, hub_count: usize) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            occupied: FixedBitSet::with_capacity(hub_count),
            position: HashMap::new(),
        };
        tree.insert(root, NodeKind::Root);
        tree
    }

    fn insert(&mut self, hub: Hub, kind: NodeKind) -> NodeId {
        assert!(
            !self.occupied.contains(hub.index()),
            "hub {:?} is already claimed by this tree",
            hub
        );
        let id = self.nodes.len();
        self.nodes.push(PathNode::new(hub, kind));
        self.occupied.insert(hub.index());
        self.position.insert(hub, id);
        id
    }

    pub fn root(&self) -> Hub {
        self.nodes[ROOT].hub
    }

    pub fn node(&self, id: NodeId) -> &PathNode {
        &self.nodes[id]
    }

    /// Live nodes with their ids, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &PathNode)> + '_ {
        self.nodes.iter().enumerate().filter(|(_, n)| !n.stripped)
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        !self.nodes[id].stripped
    }

    pub fn occupied(&self) -> &FixedBitSet {
        &self.occupied
    }

    pub fn occupies(&self, hub: Hub) -> bool {
        self.occupied.contains(hub.index())
    }

    /// Live node wrapping `hub`, if this tree owns it.
    pub fn position(&self, hub: Hub) -> Option<NodeId> {
        self.position.get(&hub).copied()
    }

    /// Live trunks in creation order.
    pub fn trunks(&self) -> &[NodeId] {
        &self.nodes[ROOT].children
    }

    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent() {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Hubs from the root down to `id`. The first one is always the root hub.
    pub fn path(&self, id: NodeId) -> Vec<Hub> {
        let mut path = vec![self.nodes[id].hub];
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent() {
            path.push(self.nodes[parent].hub);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Live nodes without live children, shallow ones first, creation order within a depth.
    pub fn frontier(&self) -> Vec<NodeId> {
        let mut frontier: Vec<NodeId> = self
            .nodes()
            .filter(|(_, n)| n.children.is_empty())
            .map(|(id, _)| id)
            .collect();
        // radsort is stable, so creation order survives inside a depth
        sort_by_key(&mut frontier, |&id| self.depth(id) as u32);
        frontier
    }

    /// Creates a child of `id` for every peer that is neither `forbidden` nor owned by
    /// this tree. Returns the new children.
    pub fn grow_node(&mut self, id: NodeId, network: &Network, forbidden: &FixedBitSet) -> Vec<NodeId> {
        let hub = self.nodes[id].hub;
        let kind = self.nodes[id].child_kind(id);
        let mut grown = Vec::new();
        for peer in network.peers(hub) {
            if forbidden.contains(peer.index()) || self.occupies(peer) {
                continue;
            }
            let child = self.insert(peer, kind);
            self.nodes[id].children.push(child);
            grown.push(child);
        }
        grown
    }

    fn contact(&self, id: NodeId, network: &Network, lover: &PathTree) -> Option<Contact> {
        let node = &self.nodes[id];
        network.peers(node.hub).find_map(|hub| {
            let peer = lover.position(hub)?;
            // roots touching each other were settled before growth started
            if node.kind == NodeKind::Root && peer == ROOT {
                return None;
            }
            Some(Contact { node: id, peer })
        })
    }

    /// Grows every frontier node by one hop.
    ///
    /// Forbidden are hubs owned by this tree, owned by `lover` or listed in `consumed`.
    /// A frontier node touching `lover` reports a contact and does not grow this round.
    /// Hubs claimed earlier in the round are denied to the frontier nodes processed later.
    pub fn grow_round(&mut self, network: &Network, consumed: &FixedBitSet, lover: &PathTree) -> Growth {
        let mut forbidden = consumed.clone();
        forbidden.union_with(lover.occupied());

        let mut growth = Growth::default();
        for id in self.frontier() {
            if let Some(contact) = self.contact(id, network, lover) {
                growth.contacts.push(contact);
                continue;
            }
            let grown = self.grow_node(id, network, &forbidden);
            growth.claimed.extend(grown);
        }

        trace!(
            root = network.name(self.root()),
            claimed = growth.claimed.len(),
            contacts = growth.contacts.len(),
            "grew round"
        );
        growth
    }

    /// Removes `trunk` and everything grown from it. Returns the released hubs.
    ///
    /// Panics if `trunk` is not a live trunk.
    pub fn strip(&mut self, trunk: NodeId) -> Vec<Hub> {
        let node = &self.nodes[trunk];
        assert!(
            node.kind == NodeKind::Trunk,
            "only trunks can be stripped, node {} is a {}",
            trunk,
            node.kind
        );
        assert!(!node.stripped, "trunk {} was already stripped", trunk);

        let mut released = Vec::new();
        let mut stack = vec![trunk];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id];
            node.stripped = true;
            self.occupied.set(node.hub.index(), false);
            self.position.remove(&node.hub);
            released.push(node.hub);
            stack.extend(node.children.iter().copied());
        }
        self.nodes[ROOT].children.retain(|&c| c != trunk);

        released
    }
}
