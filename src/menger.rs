//! Vertex-disjoint connections by shortest augmenting paths.
//!
//! Every hub except the two endpoints is split into an entry and an exit node joined
//! by an arc of capacity 1, every link becomes a pair of opposite arcs of capacity 1.
//! The maximum flow from the source exit to the target entry then equals the largest
//! number of vertex-disjoint connections, which is what the tree pair only
//! approximates.

use crate::Hub;
use crate::network::Network;
use crate::tree_blocks::connection::Connection;
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;
use tracing::debug;

fn entry(hub: Hub) -> usize {
    2 * hub.index()
}

fn exit(hub: Hub) -> usize {
    2 * hub.index() + 1
}

/// Residual network. Arc `e ^ 1` is the reverse of arc `e`, forward arcs have even ids.
struct Residual {
    arcs_from: Vec<Vec<usize>>,
    to: Vec<usize>,
    capacity: Vec<u32>,
    initial: Vec<u32>,
}

impl Residual {
    fn new(network: &Network, source: Hub, target: Hub) -> Self {
        let mut residual = Self {
            arcs_from: vec![Vec::new(); 2 * network.hub_count()],
            to: Vec::new(),
            capacity: Vec::new(),
            initial: Vec::new(),
        };
        for hub in network.hubs() {
            if hub != source && hub != target {
                residual.add_arc(entry(hub), exit(hub));
            }
        }
        for (a, b) in network.links() {
            residual.add_arc(exit(a), entry(b));
            residual.add_arc(exit(b), entry(a));
        }
        residual
    }

    fn add_arc(&mut self, from: usize, to: usize) {
        for (u, v, capacity) in [(from, to, 1), (to, from, 0)] {
            self.arcs_from[u].push(self.to.len());
            self.to.push(v);
            self.capacity.push(capacity);
            self.initial.push(capacity);
        }
    }

    /// Pushes one unit along a shortest path with spare capacity.
    fn augment(&mut self, source: usize, sink: usize) -> bool {
        let mut via = vec![usize::MAX; self.arcs_from.len()];
        let mut seen = FixedBitSet::with_capacity(self.arcs_from.len());
        let mut queue = VecDeque::new();
        seen.insert(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }
            for &e in &self.arcs_from[u] {
                let v = self.to[e];
                if self.capacity[e] > 0 && !seen.put(v) {
                    via[v] = e;
                    queue.push_back(v);
                }
            }
        }

        if !seen.contains(sink) {
            return false;
        }
        let mut v = sink;
        while v != source {
            let e = via[v];
            self.capacity[e] -= 1;
            self.capacity[e ^ 1] += 1;
            v = self.to[e ^ 1];
        }
        true
    }

    /// Splits the current flow into `count` hub sequences from `source` to `target`.
    fn decompose(&self, source: Hub, target: Hub, count: usize) -> Vec<Connection> {
        let mut flow: Vec<u32> = (0..self.to.len())
            .map(|e| match e % 2 {
                0 => self.initial[e].saturating_sub(self.capacity[e]),
                _ => 0,
            })
            .collect();

        let mut connections = Vec::with_capacity(count);
        for _ in 0..count {
            let mut hubs = vec![source];
            let mut u = exit(source);
            while u != entry(target) {
                let e = self.arcs_from[u]
                    .iter()
                    .copied()
                    .find(|&e| flow[e] > 0)
                    .expect("flow leaving a node with incoming flow");
                flow[e] -= 1;
                u = self.to[e];
                if u % 2 == 0 {
                    hubs.push(Hub::new(u / 2));
                }
            }
            connections.push(Connection::new(hubs));
        }
        connections
    }
}

/// Largest set of connections between `source` and `target` sharing no interior hub.
///
/// With `stop_above`, augmenting stops as soon as the count exceeds it.
///
/// Panics if `source == target`.
pub fn disjoint_paths(
    network: &Network,
    source: Hub,
    target: Hub,
    stop_above: Option<usize>,
) -> Vec<Connection> {
    assert_ne!(source, target, "disjoint paths need two distinct endpoints");
    let mut residual = Residual::new(network, source, target);

    let mut count = 0;
    while !stop_above.is_some_and(|limit| count > limit) {
        if !residual.augment(exit(source), entry(target)) {
            break;
        }
        count += 1;
    }

    debug!(
        source = network.name(source),
        target = network.name(target),
        count,
        "augmented"
    );
    residual.decompose(source, target, count)
}
