//! Plants a cut of three links between two cliques and recovers it with both strategies.
//! Usage: `RUST_LOG=debug cargo run --example bisect_planted`

use hub_bisect::testing::random_graphs::planted_cut;
use hub_bisect::{BisectConfig, Strategy, bisect};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let network = planted_cut(12, 3, 2024);
    for strategy in [Strategy::LoverTrees, Strategy::Augmenting] {
        let config = BisectConfig::default().with_strategy(strategy).with_parallel(true);
        let partition = bisect(&network, &config).expect("planted network converges");
        println!(
            "{}: {:?} -> {}",
            strategy,
            partition.sizes(),
            partition.product()
        );
    }
}
