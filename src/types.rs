/// A vertex of the hub network.
///
/// Hubs are petgraph node indices, so they are `Copy` and can index bitsets directly.
pub type Hub = petgraph::graph::NodeIndex;

/// Wrapper for petgraph's graph type. Node weights are hub names, edges carry nothing.
pub type HubGraph = petgraph::graph::UnGraph<String, ()>;
