// #![warn(missing_docs)]

//! # hub_bisect
//!
//! Splits an undirected hub network into the two groups separated by its minimum
//! cut, given the size of that cut.
//!
//! Two hubs lie on the same side exactly when they are joined by more vertex-disjoint
//! connections than the cut has links. Connections are discovered by growing two
//! path trees, one from each hub, until they touch ([`tree_pair`]), or exactly with
//! augmenting paths ([`menger`]).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ```
//! use hub_bisect::{BisectConfig, bisect, input::from_str};
//!
//! let network = from_str("a: b c\nb: c\nc: d\n").unwrap();
//! let partition = bisect(&network, &BisectConfig::default().with_threshold(1)).unwrap();
//! assert_eq!(partition.sizes(), (3, 1));
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod menger;
pub mod network;
pub mod output;
pub mod testing;
pub mod tree_blocks;
pub mod tree_pair;
pub mod types;

pub use classify::{Partition, bisect, bisect_from};
pub use config::{BisectConfig, Strategy};
pub use error::{BisectError, InputError};
pub use network::Network;
pub use types::{Hub, HubGraph};
