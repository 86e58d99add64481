use crate::Hub;
use crate::classify::Partition;
use crate::network::Network;
use fixedbitset::FixedBitSet;
use std::io;
use std::path::Path;

/// Returns the network in DOT format, coloured by `partition`.
///
/// It shows hub names, not petgraph's internal indices.
///
/// Group A is lightblue, group B orange, hubs in neither are white. Links crossing
/// the cut are dashed.
///
/// Intended to be used with `neato`.
pub fn draw_partition(network: &Network, partition: &Partition) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=white];\n");

    let mut in_a = FixedBitSet::with_capacity(network.hub_count());
    let mut in_b = FixedBitSet::with_capacity(network.hub_count());
    in_a.extend(partition.group_a.iter().map(|hub| hub.index()));
    in_b.extend(partition.group_b.iter().map(|hub| hub.index()));
    let group = |hub: Hub| {
        if in_a.contains(hub.index()) {
            Some(0)
        } else if in_b.contains(hub.index()) {
            Some(1)
        } else {
            None
        }
    };

    for hub in network.hubs() {
        let color = match group(hub) {
            Some(0) => "lightblue",
            Some(_) => "orange",
            None => "white",
        };
        output.push_str(&format!(
            "  {} [label=\"{}\", fillcolor={}];\n",
            hub.index(),
            network.name(hub),
            color
        ));
    }

    for (a, b) in network.links() {
        let style = if group(a) != group(b) { "dashed" } else { "solid" };
        output.push_str(&format!(
            "  {} -- {} [style={}];\n",
            a.index(),
            b.index(),
            style
        ));
    }
    output.push_str("}\n");
    output
}

/// Writes the network to a file in DOT format.
pub fn to_dot_file(network: &Network, partition: &Partition, path: impl AsRef<Path>) -> io::Result<()> {
    to_file(&draw_partition(network, partition), path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: impl AsRef<Path>) -> io::Result<()> {
    std::fs::write(path, content)
}
