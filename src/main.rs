use anyhow::Result;
use clap::Parser;

use link_rank::data;
use link_rank::storage::{self, ScoreEntry};
use link_rank::{PageRank, RankConfig};

#[derive(Parser, Debug)]
#[clap(
    name = "link-rank",
    about = "Rank the labels of a link graph by PageRank score"
)]
struct Cli {
    /// Path to an edge list (one `from to` pair per line)
    #[clap(long)]
    input: String,

    /// Output directory for results
    #[clap(long)]
    output_dir: Option<String>,

    /// JSON file with solver parameters
    #[clap(long)]
    config: Option<String>,

    /// Probability of following a link (overrides the config file)
    #[clap(long)]
    damping: Option<f64>,

    /// Convergence bound on the L1 change between iterations
    #[clap(long)]
    tolerance: Option<f64>,

    /// Give up after this many iterations
    #[clap(long)]
    max_iterations: Option<usize>,

    /// Number of top ranked labels to print
    #[clap(long, default_value = "20")]
    top: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = match &args.config {
        Some(path) => RankConfig::from_json_file(path)?,
        None => RankConfig::default(),
    };
    if let Some(damping) = args.damping {
        config.damping_factor = damping;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if args.max_iterations.is_some() {
        config.max_iterations = args.max_iterations;
    }

    log::info!("Starting link ranking");
    log::info!("Input: {}", args.input);

    // 1. Load links
    let graph = data::load_edge_list(&args.input)?;
    let pagerank = PageRank::from_graph(graph);

    // 2. Rank
    let mut scores = Vec::with_capacity(pagerank.len());
    let stats = pagerank.rank_with(&config, |label, score| {
        scores.push(ScoreEntry {
            label: label.to_string(),
            score,
        })
    })?;

    log::info!(
        "Ranked {} labels in {} iterations",
        scores.len(),
        stats.iterations
    );

    // 3. Report
    for entry in storage::top_n(&scores, args.top) {
        println!("{}\t{:.6}", entry.label, entry.score);
    }

    // 4. Save results if requested
    if let Some(output_dir) = &args.output_dir {
        storage::save_results(&scores, pagerank.graph(), &stats, &config, args.top, output_dir)?;
        log::info!("Results saved to {}", output_dir);
    }

    Ok(())
}
