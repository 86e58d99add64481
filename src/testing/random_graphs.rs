use crate::network::Network;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Connected network on hubs `h0..h{n-1}`: a random spanning tree plus up to
/// `m - n + 1` random extra links. Self-loops and repeats are dropped.
pub fn random_network(n: usize, m: usize, seed: usize) -> Network {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut network = Network::new();

    let hubs: Vec<_> = (0..n).map(|i| network.add_hub(&format!("h{}", i))).collect();
    for i in 1..n {
        let j = rng.random_range(0..i);
        network.connect(hubs[i], hubs[j]);
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        network.connect(hubs[s], hubs[t]);
    }

    network
}

/// Two cliques of `cluster` hubs, named `l*` and `r*`, joined by exactly `cut`
/// random links. The left clique is added first.
pub fn planted_cut(cluster: usize, cut: usize, seed: usize) -> Network {
    assert!(cut <= cluster * cluster, "cannot plant {} links", cut);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut network = Network::new();

    let left: Vec<_> = (0..cluster).map(|i| network.add_hub(&format!("l{}", i))).collect();
    let right: Vec<_> = (0..cluster).map(|i| network.add_hub(&format!("r{}", i))).collect();
    for side in [&left, &right] {
        for (i, &a) in side.iter().enumerate() {
            for &b in &side[i + 1..] {
                network.connect(a, b);
            }
        }
    }

    let mut bridges = 0;
    while bridges < cut {
        let a = left[rng.random_range(0..cluster)];
        let b = right[rng.random_range(0..cluster)];
        if network.connect(a, b) {
            bridges += 1;
        }
    }

    network
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_network_is_deterministic() {
        let a = random_network(20, 40, 7);
        let b = random_network(20, 40, 7);
        assert_eq!(a.hub_count(), 20);
        assert!(a.connection_count() >= 19);
        assert_eq!(a.links().collect::<Vec<_>>(), b.links().collect::<Vec<_>>());
    }

    #[test]
    fn test_planted_cut_counts() {
        let network = planted_cut(6, 3, 1);
        assert_eq!(network.hub_count(), 12);
        assert_eq!(network.connection_count(), 2 * 15 + 3);
        let crossing = network
            .links()
            .filter(|&(a, b)| network.name(a).chars().next() != network.name(b).chars().next())
            .count();
        assert_eq!(crossing, 3);
    }
}
