/// How connections between two hubs are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Two path trees grown in lockstep, see [`crate::tree_pair::TreePair`].
    #[default]
    LoverTrees,
    /// Shortest augmenting paths on a vertex-split network, see [`crate::menger`].
    Augmenting,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::LoverTrees => write!(f, "lover-trees"),
            Strategy::Augmenting => write!(f, "augmenting"),
        }
    }
}

/// Settings shared by every tree pair of a classification run.
#[derive(Debug, Clone)]
pub struct BisectConfig {
    /// Size of the global minimum cut. A pair with more connections than this lies on one side.
    pub cut_threshold: usize,
    /// Upper bound on growth layers per tree pair.
    pub max_rounds: usize,
    pub strategy: Strategy,
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            cut_threshold: 3,
            max_rounds: 10_000,
            strategy: Strategy::default(),
            parallel: false,
        }
    }
}

impl BisectConfig {
    pub fn with_threshold(mut self, cut_threshold: usize) -> Self {
        self.cut_threshold = cut_threshold;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
