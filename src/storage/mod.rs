//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{json, to_string_pretty};

use crate::config::RankConfig;
use crate::graph::GraphBuilder;
use crate::rank::ConvergenceStats;

/// A label with its final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub label: String,
    pub score: f64,
}

/// Highest scored entries, ties kept in index order
pub fn top_n(scores: &[ScoreEntry], n: usize) -> Vec<&ScoreEntry> {
    scores
        .iter()
        .sorted_by(|a, b| b.score.total_cmp(&a.score))
        .take(n)
        .collect()
}

/// Save ranking results to the specified directory
pub fn save_results(
    scores: &[ScoreEntry],
    graph: &GraphBuilder,
    stats: &ConvergenceStats,
    config: &RankConfig,
    top: usize,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} scores to {}", scores.len(), output_dir);

    fs::create_dir_all(output_dir)?;

    save_scores(scores, output_dir)?;
    save_summary(scores, graph, stats, config, top, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save every score in node index order
fn save_scores(scores: &[ScoreEntry], output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("scores.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(scores)?.as_bytes())?;

    Ok(())
}

/// Save graph statistics, solver parameters and the top ranked labels
fn save_summary(
    scores: &[ScoreEntry],
    graph: &GraphBuilder,
    stats: &ConvergenceStats,
    config: &RankConfig,
    top: usize,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let summary = json!({
        "graph_stats": graph.degree_summary(),
        "config": config,
        "convergence": stats,
        "score_sum": scores.iter().map(|entry| entry.score).sum::<f64>(),
        "top": top_n(scores, top),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}
