//! Error types for graph ranking

use thiserror::Error;

/// Errors reported by the rank solver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Ranking was requested before any link was recorded
    #[error("cannot rank an empty graph")]
    EmptyGraph,

    /// A solver parameter is outside its valid range
    #[error("invalid {name} ({value}): {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value, rendered for display
        value: String,
        /// Accepted range
        reason: &'static str,
    },

    /// The iteration ceiling was reached before the delta fell below tolerance
    #[error("no convergence after {iterations} iterations (last delta {delta:e})")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
        /// L1 delta of the last iteration
        delta: f64,
    },
}
