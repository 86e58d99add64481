use crate::Hub;
use crate::network::Network;
use fixedbitset::FixedBitSet;

/// One path from the source hub to the target hub of a tree pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    hubs: Vec<Hub>,
}

impl Connection {
    /// Panics on fewer than two hubs.
    pub fn new(hubs: Vec<Hub>) -> Self {
        assert!(
            hubs.len() >= 2,
            "a connection needs two endpoints, got {} hubs",
            hubs.len()
        );
        Self { hubs }
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    pub fn source(&self) -> Hub {
        self.hubs[0]
    }

    pub fn target(&self) -> Hub {
        self.hubs[self.hubs.len() - 1]
    }

    /// Hubs strictly between the endpoints.
    pub fn interior(&self) -> &[Hub] {
        &self.hubs[1..self.hubs.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_direct(&self) -> bool {
        self.hubs.len() == 2
    }

    pub fn display(&self, network: &Network) -> String {
        format!("[{}]", network.names(&self.hubs).join(", "))
    }
}

/// Append-only list of connections between two fixed endpoints.
///
/// Interior hubs of registered connections are consumed: no later connection and
/// no tree node may use them again.
#[derive(Debug, Clone)]
pub struct ConnectionRegistry {
    source: Hub,
    target: Hub,
    connections: Vec<Connection>,
    consumed: FixedBitSet,
}

impl ConnectionRegistry {
    pub fn new(source: Hub, target: Hub, hub_count: usize) -> Self {
        Self {
            source,
            target,
            connections: Vec::new(),
            consumed: FixedBitSet::with_capacity(hub_count),
        }
    }

    /// Records `connection` and consumes its interior.
    ///
    /// Panics if the endpoints are wrong, a hub repeats, an interior hub is already
    /// consumed or the same connection was registered before.
    pub fn register(&mut self, connection: Connection) -> &Connection {
        assert!(
            connection.source() == self.source && connection.target() == self.target,
            "connection runs {:?} -> {:?}, expected {:?} -> {:?}",
            connection.source(),
            connection.target(),
            self.source,
            self.target
        );
        let mut seen = FixedBitSet::with_capacity(self.consumed.len());
        for &hub in connection.hubs() {
            assert!(!seen.put(hub.index()), "hub {:?} repeats in a connection", hub);
        }
        for &hub in connection.interior() {
            assert!(
                !self.consumed.contains(hub.index()),
                "hub {:?} is already part of a connection",
                hub
            );
        }
        assert!(
            !self.connections.contains(&connection),
            "connection {:?} is already registered",
            connection.hubs()
        );

        for &hub in connection.interior() {
            self.consumed.insert(hub.index());
        }
        self.connections.push(connection);
        &self.connections[self.connections.len() - 1]
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn consumed(&self) -> &FixedBitSet {
        &self.consumed
    }

    pub fn is_consumed(&self, hub: Hub) -> bool {
        self.consumed.contains(hub.index())
    }

    pub fn into_connections(self) -> Vec<Connection> {
        self.connections
    }
}
