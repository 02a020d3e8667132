//! Power iteration over a finished link graph

use serde::{Deserialize, Serialize};

use crate::config::RankConfig;
use crate::error::RankError;
use crate::graph::GraphBuilder;

/// How a ranking pass terminated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceStats {
    /// Number of iterations performed
    pub iterations: usize,

    /// L1 distance between the last two score vectors
    pub final_delta: f64,
}

/// Final scores of a ranking pass, indexed by node
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    pub scores: Vec<f64>,
    pub stats: ConvergenceStats,
}

/// Computes rank scores for a graph it borrows read-only
pub struct RankSolver<'a> {
    graph: &'a GraphBuilder,
    config: &'a RankConfig,
}

impl<'a> RankSolver<'a> {
    pub fn new(graph: &'a GraphBuilder, config: &'a RankConfig) -> Self {
        Self { graph, config }
    }

    /// Iterate until the L1 delta drops below the tolerance
    ///
    /// Every node starts at `1/n`. Each step spreads a node's score evenly over
    /// its outgoing links, hands the mass of dangling nodes to every node
    /// uniformly, applies damping and renormalizes so the scores sum to 1.
    pub fn solve(&self) -> Result<RankOutcome, RankError> {
        self.config.validate()?;

        let size = self.graph.len();
        if size == 0 {
            return Err(RankError::EmptyGraph);
        }

        let dangling = self.graph.dangling_nodes();
        log::info!(
            "Ranking {} nodes ({} dangling, {} links) with damping {} and tolerance {:e}",
            size,
            dangling.len(),
            self.graph.edge_count(),
            self.config.damping_factor,
            self.config.tolerance
        );

        let mut scores = vec![1.0 / size as f64; size];
        let mut next = vec![0.0; size];
        let mut iterations = 0;

        loop {
            self.step(&scores, &dangling, &mut next);
            let delta = l1_distance(&scores, &next);
            std::mem::swap(&mut scores, &mut next);
            iterations += 1;

            log::debug!("Iteration {}: delta {:e}", iterations, delta);

            if delta < self.config.tolerance {
                log::info!("Converged after {} iterations (delta {:e})", iterations, delta);
                return Ok(RankOutcome {
                    scores,
                    stats: ConvergenceStats {
                        iterations,
                        final_delta: delta,
                    },
                });
            }

            if self.config.max_iterations == Some(iterations) {
                log::warn!(
                    "Stopping after {} iterations without convergence (delta {:e})",
                    iterations,
                    delta
                );
                return Err(RankError::NotConverged { iterations, delta });
            }
        }
    }

    /// Solve, then report every node's label and score in index order
    ///
    /// `on_result` is not called at all when solving fails.
    pub fn rank<F>(&self, mut on_result: F) -> Result<ConvergenceStats, RankError>
    where
        F: FnMut(&str, f64),
    {
        let outcome = self.solve()?;

        for (label, &score) in self.graph.labels().zip(&outcome.scores) {
            on_result(label, score);
        }

        Ok(outcome.stats)
    }

    /// Compute the next normalized score vector into `next`
    fn step(&self, scores: &[f64], dangling: &[u32], next: &mut [f64]) {
        let size = scores.len() as f64;
        let damping = self.config.damping_factor;
        let teleport = (1.0 - damping) / size;

        let dangling_mass = dangling.iter().map(|&node| scores[node as usize]).sum::<f64>() / size;

        let mut total = 0.0;
        for (node, slot) in next.iter_mut().enumerate() {
            let incoming_sum: f64 = self
                .graph
                .incoming(node)
                .iter()
                .map(|&src| scores[src as usize] / self.graph.out_degree(src as usize) as f64)
                .sum();

            *slot = damping * (incoming_sum + dangling_mass) + teleport;
            total += *slot;
        }

        for slot in next.iter_mut() {
            *slot /= total;
        }
    }
}

/// Sum of absolute differences between two equally sized vectors
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
