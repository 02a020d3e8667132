//! Rank computation module

pub mod solver;

pub use solver::{l1_distance, ConvergenceStats, RankOutcome, RankSolver};

use crate::config::RankConfig;
use crate::error::RankError;
use crate::graph::GraphBuilder;

/// Records labeled links, then ranks the labels
///
/// ```
/// use link_rank::PageRank;
///
/// let mut pr = PageRank::new();
/// pr.link("home", "about");
/// pr.link("about", "home");
///
/// let mut total = 0.0;
/// pr.rank(0.85, 1e-6, |_label, score| total += score).unwrap();
/// assert!((total - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Default, Clone)]
pub struct PageRank {
    graph: GraphBuilder,
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already populated graph
    pub fn from_graph(graph: GraphBuilder) -> Self {
        Self { graph }
    }

    /// Record a directed link; labels are created on first use
    pub fn link(&mut self, from: &str, to: &str) {
        self.graph.link(from, to);
    }

    /// Number of distinct labels seen so far
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn graph(&self) -> &GraphBuilder {
        &self.graph
    }

    /// Rank with the given damping factor and tolerance, no iteration ceiling
    pub fn rank<F>(
        &self,
        damping_factor: f64,
        tolerance: f64,
        on_result: F,
    ) -> Result<ConvergenceStats, RankError>
    where
        F: FnMut(&str, f64),
    {
        self.rank_with(&RankConfig::new(damping_factor, tolerance), on_result)
    }

    pub fn rank_with<F>(&self, config: &RankConfig, on_result: F) -> Result<ConvergenceStats, RankError>
    where
        F: FnMut(&str, f64),
    {
        RankSolver::new(&self.graph, config).rank(on_result)
    }
}
