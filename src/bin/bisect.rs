//! Reads a hub network and prints the sizes of the two groups separated by its
//! minimum cut, followed by their product.
//!
//! Usage: `bisect network.txt --threshold 3 --dot partition.dot`

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hub_bisect::{BisectConfig, Strategy, bisect, bisect_from, input, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Path trees grown from both hubs
    LoverTrees,
    /// Exact shortest augmenting paths
    Augmenting,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::LoverTrees => Strategy::LoverTrees,
            StrategyArg::Augmenting => Strategy::Augmenting,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bisect")]
#[command(about = "Split a hub network along its minimum cut")]
struct Args {
    /// Network file, one `name: peer1 peer2 ...` line per hub
    input: PathBuf,

    /// Hub every other hub is compared with (defaults to the first hub)
    #[arg(short, long)]
    anchor: Option<String>,

    /// Number of links in the minimum cut
    #[arg(short, long, default_value = "3")]
    threshold: usize,

    #[arg(short, long, value_enum, default_value = "lover-trees")]
    strategy: StrategyArg,

    /// Evaluate hub pairs on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Growth layers allowed per hub pair
    #[arg(long, default_value = "10000")]
    max_rounds: usize,

    /// Also write the coloured network in DOT format
    #[arg(long)]
    dot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the answer, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let network = input::from_file(&args.input)
        .with_context(|| format!("Failed to read network from {}", args.input.display()))?;
    tracing::info!(
        hubs = network.hub_count(),
        links = network.connection_count(),
        "network loaded"
    );

    let config = BisectConfig::default()
        .with_threshold(args.threshold)
        .with_max_rounds(args.max_rounds)
        .with_strategy(args.strategy.into())
        .with_parallel(args.parallel);

    let partition = match &args.anchor {
        Some(anchor) => bisect_from(&network, anchor, &config)?,
        None => bisect(&network, &config)?,
    };

    let (a, b) = partition.sizes();
    println!("{} {}", a, b);
    println!("{}", partition.product());

    if let Some(path) = &args.dot {
        output::to_dot_file(&network, &partition, path)
            .with_context(|| format!("Failed to write drawing to {}", path.display()))?;
    }
    Ok(())
}
