use crate::error::InputError;
use crate::network::Network;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Reads a hub network from a file.
///
/// Undirected adjacency list input:
/// - one line per hub in format "name: peer1 peer2 ...",
/// - a connection has to be listed on one side only,
/// - a peer that never gets its own line still becomes a hub.
///
/// <div class="warning">
///
/// > Duplicate connections and self references are dropped silently.
/// > Petgraph will decide about IDs of hubs. Look hubs up by name.
///
/// </div>
///
/// Example input:
/// ```text
/// jqt: rhn xhk nvd
/// rsh: frs pzl lsr
/// xhk: hfx
/// cmg: qnr nvd lhk bvb
/// rhn: xhk bvb hfx
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<Network, InputError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Network, InputError> {
    from_reader(BufReader::new(Cursor::new(input)))
}

pub fn from_reader<R: BufRead>(reader: R) -> Result<Network, InputError> {
    let mut network = Network::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (name, peers) = line
            .split_once(':')
            .ok_or(InputError::MissingSeparator { line: i + 1 })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyName { line: i + 1 });
        }

        let hub = network.add_hub(name);
        for peer in peers.split_whitespace() {
            let peer = network.add_hub(peer);
            network.connect(hub, peer);
        }
    }

    Ok(network)
}
