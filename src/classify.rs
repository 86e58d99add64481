//! Splitting a network in two along its minimum cut.
//!
//! Two hubs on the same side of a cut of size `k` are joined by more than `k`
//! vertex-disjoint connections, two hubs on opposite sides by at most `k`. Every hub
//! is therefore compared with one anchor hub: a count above the threshold puts it in
//! the anchor's group, anything else in the other group.

use crate::config::{BisectConfig, Strategy};
use crate::error::{BisectError, Result};
use crate::menger;
use crate::network::Network;
use crate::tree_blocks::connection::Connection;
use crate::tree_pair::TreePair;
use crate::Hub;
use rayon::prelude::*;
use tracing::{debug, info};

/// The two groups of a bisection. `group_a` always holds the anchor first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub group_a: Vec<Hub>,
    pub group_b: Vec<Hub>,
}

impl Partition {
    pub fn sizes(&self) -> (usize, usize) {
        (self.group_a.len(), self.group_b.len())
    }

    /// Product of the group sizes.
    pub fn product(&self) -> usize {
        self.group_a.len() * self.group_b.len()
    }
}

/// Connections between `a` and `b` found with the configured strategy.
///
/// Discovery stops once the count exceeds `config.cut_threshold`, so the result is
/// exact only up to that point.
pub fn count_connections(
    network: &Network,
    a: Hub,
    b: Hub,
    config: &BisectConfig,
) -> Result<Vec<Connection>> {
    let stop_above = Some(config.cut_threshold);
    match config.strategy {
        Strategy::LoverTrees => {
            let mut pair = TreePair::new(network, a, b);
            pair.run(stop_above, config.max_rounds)?;
            Ok(pair.into_connections())
        }
        Strategy::Augmenting => Ok(menger::disjoint_paths(network, a, b, stop_above)),
    }
}

/// Path trees never find more connections than exist, so only a count at or below
/// the threshold is rechecked with augmenting paths.
fn same_side(network: &Network, anchor: Hub, hub: Hub, config: &BisectConfig) -> Result<bool> {
    let mut count = count_connections(network, anchor, hub, config)?.len();
    if config.strategy == Strategy::LoverTrees && count <= config.cut_threshold {
        let exact =
            menger::disjoint_paths(network, anchor, hub, Some(config.cut_threshold)).len();
        if exact != count {
            debug!(hub = network.name(hub), trees = count, exact, "trees undercounted");
        }
        count = exact;
    }
    let same = count > config.cut_threshold;
    debug!(hub = network.name(hub), count, same, "classified");
    Ok(same)
}

/// Sorts `candidates` into the anchor's group or the other one.
///
/// The anchor itself is skipped if listed. Groups keep candidate order, also when
/// the pairs are evaluated in parallel.
pub fn partition(
    network: &Network,
    anchor: Hub,
    candidates: &[Hub],
    config: &BisectConfig,
) -> Result<Partition> {
    let candidates: Vec<Hub> = candidates.iter().copied().filter(|&c| c != anchor).collect();
    let verdicts: Vec<bool> = if config.parallel {
        candidates
            .par_iter()
            .map(|&hub| same_side(network, anchor, hub, config))
            .collect::<Result<_>>()?
    } else {
        candidates
            .iter()
            .map(|&hub| same_side(network, anchor, hub, config))
            .collect::<Result<_>>()?
    };

    let mut partition = Partition {
        group_a: vec![anchor],
        group_b: Vec::new(),
    };
    for (hub, same) in candidates.into_iter().zip(verdicts) {
        if same {
            partition.group_a.push(hub);
        } else {
            partition.group_b.push(hub);
        }
    }

    info!(
        anchor = network.name(anchor),
        strategy = %config.strategy,
        group_a = partition.group_a.len(),
        group_b = partition.group_b.len(),
        "partitioned network"
    );
    Ok(partition)
}

/// Bisects the whole network using its first hub as the anchor.
///
/// An empty network gives two empty groups.
pub fn bisect(network: &Network, config: &BisectConfig) -> Result<Partition> {
    let hubs: Vec<Hub> = network.hubs().collect();
    match hubs.first() {
        Some(&anchor) => partition(network, anchor, &hubs, config),
        None => Ok(Partition::default()),
    }
}

/// Bisects the whole network around the hub called `anchor`.
pub fn bisect_from(network: &Network, anchor: &str, config: &BisectConfig) -> Result<Partition> {
    let anchor = network
        .hub(anchor)
        .ok_or_else(|| BisectError::UnknownHub(anchor.to_string()))?;
    let hubs: Vec<Hub> = network.hubs().collect();
    partition(network, anchor, &hubs, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;
    use crate::testing::random_graphs::{planted_cut, random_network};
    use crate::testing::shapes::{SAMPLE, TRIANGLE_WITH_PENDANT};

    fn names(network: &Network, hubs: &[Hub]) -> Vec<String> {
        let mut names: Vec<String> = network.names(hubs).into_iter().map(String::from).collect();
        names.sort();
        names
    }

    #[test]
    fn test_sample_bisection() {
        let network = from_str(SAMPLE).unwrap();
        for strategy in [Strategy::LoverTrees, Strategy::Augmenting] {
            let config = BisectConfig::default().with_strategy(strategy);
            let partition = bisect(&network, &config).unwrap();
            assert_eq!(partition.sizes(), (6, 9), "{}", strategy);
            assert_eq!(partition.product(), 54);
            assert_eq!(
                names(&network, &partition.group_a),
                vec!["bvb", "hfx", "jqt", "ntq", "rhn", "xhk"]
            );
        }
    }

    #[test]
    fn test_anchor_leads_group_a() {
        let network = from_str(SAMPLE).unwrap();
        let partition = bisect_from(&network, "rsh", &BisectConfig::default()).unwrap();
        assert_eq!(network.name(partition.group_a[0]), "rsh");
        assert_eq!(partition.sizes(), (9, 6));
    }

    #[test]
    fn test_every_anchor_finds_the_same_cut() {
        let network = from_str(SAMPLE).unwrap();
        for strategy in [Strategy::LoverTrees, Strategy::Augmenting] {
            let config = BisectConfig::default().with_strategy(strategy);
            for hub in network.hubs() {
                let anchor = network.name(hub);
                let partition = bisect_from(&network, anchor, &config).unwrap();
                assert_eq!(partition.product(), 54, "anchor {} strategy {}", anchor, strategy);
            }
        }
    }

    #[test]
    fn test_undercounted_pair_stays_together() {
        let network = from_str(SAMPLE).unwrap();
        let nvd = network.hub("nvd").unwrap();
        let rsh = network.hub("rsh").unwrap();

        let mut pair = TreePair::new(&network, nvd, rsh);
        assert_eq!(pair.run(None, 10_000).unwrap(), 3);
        assert_eq!(menger::disjoint_paths(&network, nvd, rsh, None).len(), 4);

        let partition = partition(&network, nvd, &[rsh], &BisectConfig::default()).unwrap();
        assert_eq!(partition.group_a, vec![nvd, rsh]);
    }

    #[test]
    fn test_pendant_split() {
        let network = from_str(TRIANGLE_WITH_PENDANT).unwrap();
        let config = BisectConfig::default().with_threshold(1);
        let partition = bisect(&network, &config).unwrap();
        assert_eq!(names(&network, &partition.group_a), vec!["a", "b", "c"]);
        assert_eq!(names(&network, &partition.group_b), vec!["d"]);
        assert_eq!(partition.product(), 3);
    }

    #[test]
    fn test_isolated_hub_is_never_with_the_anchor() {
        let network = from_str(&format!("{}e:\n", TRIANGLE_WITH_PENDANT)).unwrap();
        let config = BisectConfig::default().with_threshold(1);
        let partition = bisect(&network, &config).unwrap();
        assert_eq!(names(&network, &partition.group_b), vec!["d", "e"]);

        let partition = bisect_from(&network, "e", &config).unwrap();
        assert_eq!(partition.sizes(), (1, 4));
    }

    #[test]
    fn test_candidates_skip_the_anchor() {
        let network = from_str(TRIANGLE_WITH_PENDANT).unwrap();
        let a = network.hub("a").unwrap();
        let d = network.hub("d").unwrap();
        let config = BisectConfig::default().with_threshold(1);
        let partition = partition(&network, a, &[a, d, a], &config).unwrap();
        assert_eq!(partition.group_a, vec![a]);
        assert_eq!(partition.group_b, vec![d]);
    }

    #[test]
    fn test_empty_network() {
        let partition = bisect(&Network::new(), &BisectConfig::default()).unwrap();
        assert_eq!(partition.sizes(), (0, 0));
        assert_eq!(partition.product(), 0);
    }

    #[test]
    fn test_unknown_anchor() {
        let network = from_str(SAMPLE).unwrap();
        let result = bisect_from(&network, "nope", &BisectConfig::default());
        assert!(matches!(result, Err(BisectError::UnknownHub(name)) if name == "nope"));
    }

    #[test]
    fn test_round_guard_propagates() {
        let network = from_str(SAMPLE).unwrap();
        let config = BisectConfig::default().with_max_rounds(0);
        let result = bisect(&network, &config);
        assert!(matches!(result, Err(BisectError::NonConvergent { .. })));
    }

    #[test]
    fn test_planted_cuts_are_recovered() {
        for seed in 0..20 {
            let network = planted_cut(6 + seed % 3, 1 + seed % 3, seed);
            for strategy in [Strategy::LoverTrees, Strategy::Augmenting] {
                let config = BisectConfig::default().with_strategy(strategy);
                let partition = bisect(&network, &config).unwrap();
                assert!(
                    partition
                        .group_a
                        .iter()
                        .all(|&hub| network.name(hub).starts_with('l')),
                    "seed {} strategy {}",
                    seed,
                    strategy
                );
                assert!(
                    partition
                        .group_b
                        .iter()
                        .all(|&hub| network.name(hub).starts_with('r'))
                );
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let network = planted_cut(8, 3, 11);
        let config = BisectConfig::default();
        let sequential = bisect(&network, &config).unwrap();
        let parallel = bisect(&network, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);

        let network = from_str(SAMPLE).unwrap();
        assert_eq!(
            bisect(&network, &config).unwrap(),
            bisect(&network, &config.with_parallel(true)).unwrap()
        );
    }

    #[test]
    fn test_trees_never_beat_augmenting() {
        for i in 0..40 {
            let n = 5 + i / 2;
            let network = random_network(n, 2 * n + i, i);
            let hubs: Vec<Hub> = network.hubs().collect();
            for &target in &hubs[1..] {
                let mut pair = TreePair::new(&network, hubs[0], target);
                let found = pair.run(None, 10_000).unwrap();
                let exact = menger::disjoint_paths(&network, hubs[0], target, None).len();
                assert!(found <= exact, "seed {} target {:?}", i, target);
            }
        }
    }

    #[cfg(all(test, not(debug_assertions)))]
    #[test]
    fn test_planted_cuts_exhaustive() {
        for i in 0..300 {
            println!("test_planted_cuts_exhaustive() it: {}", i);

            let network = planted_cut(6 + i / 10, 1 + i % 3, i);
            let config = BisectConfig::default().with_parallel(true);
            let partition = bisect(&network, &config).unwrap();
            assert_eq!(partition.sizes(), (6 + i / 10, 6 + i / 10));
            assert!(
                partition
                    .group_a
                    .iter()
                    .all(|&hub| network.name(hub).starts_with('l'))
            );
        }
    }
}
