use crate::{Hub, HubGraph};
use hashbrown::HashMap;
use petgraph::visit::EdgeRef;

/// Undirected hub network.
///
/// Built once, then shared read-only by every tree pair. Peers of a hub are kept
/// free of duplicates and self references.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: HubGraph,
    by_name: HashMap<String, Hub>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            graph: HubGraph::new_undirected(),
            by_name: HashMap::new(),
        }
    }

    /// Returns the hub called `name`, creating it first if needed.
    pub fn add_hub(&mut self, name: &str) -> Hub {
        if let Some(&hub) = self.by_name.get(name) {
            return hub;
        }
        let hub = self.graph.add_node(name.to_string());
        self.by_name.insert(name.to_string(), hub);
        hub
    }

    /// Peers `a` and `b` with each other.
    ///
    /// Returns `false` and leaves the network untouched for self references and
    /// connections that already exist.
    pub fn connect(&mut self, a: Hub, b: Hub) -> bool {
        if a == b || self.graph.contains_edge(a, b) {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    pub fn hub(&self, name: &str) -> Option<Hub> {
        self.by_name.get(name).copied()
    }

    pub fn name(&self, hub: Hub) -> &str {
        &self.graph[hub]
    }

    /// Peers of `hub` in adjacency order. The order never changes once the network is built.
    pub fn peers(&self, hub: Hub) -> impl Iterator<Item = Hub> + '_ {
        self.graph.neighbors(hub)
    }

    pub fn are_peers(&self, a: Hub, b: Hub) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn hubs(&self) -> impl Iterator<Item = Hub> + '_ {
        self.graph.node_indices()
    }

    pub fn hub_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected connections (edges).
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All connections as hub pairs, each listed once.
    pub fn links(&self) -> impl Iterator<Item = (Hub, Hub)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }

    pub fn graph(&self) -> &HubGraph {
        &self.graph
    }

    /// Names of `hubs`, in order. Handy for logs and assertions.
    pub fn names(&self, hubs: &[Hub]) -> Vec<&str> {
        hubs.iter().map(|&h| self.name(h)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_hub_is_idempotent() {
        let mut network = Network::new();
        let a = network.add_hub("jqt");
        let b = network.add_hub("rhn");
        assert_ne!(a, b);
        assert_eq!(network.add_hub("jqt"), a);
        assert_eq!(network.hub_count(), 2);
        assert_eq!(network.hub("rhn"), Some(b));
        assert_eq!(network.hub("xhk"), None);
        assert_eq!(network.name(a), "jqt");
    }

    #[test]
    fn test_connect_rejects_duplicates_and_loops() {
        let mut network = Network::new();
        let a = network.add_hub("a");
        let b = network.add_hub("b");
        assert!(network.connect(a, b));
        assert!(!network.connect(b, a));
        assert!(!network.connect(a, b));
        assert!(!network.connect(a, a));
        assert_eq!(network.connection_count(), 1);
        assert!(network.are_peers(a, b));
        assert!(network.are_peers(b, a));
        assert_eq!(network.peers(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(network.peers(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_links_are_listed_once() {
        let mut network = Network::new();
        let a = network.add_hub("a");
        let b = network.add_hub("b");
        let c = network.add_hub("c");
        network.connect(a, b);
        network.connect(b, c);
        network.connect(c, a);
        assert_eq!(network.links().count(), 3);
        assert_eq!(network.names(&[c, a]), vec!["c", "a"]);
    }
}
