//! Link graph ranking: record labeled links, then compute normalized rank scores

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod rank;
pub mod storage;

pub use config::RankConfig;
pub use error::RankError;
pub use graph::GraphBuilder;
pub use rank::{ConvergenceStats, PageRank, RankSolver};
