//! Edge list file handling

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::graph::GraphBuilder;

/// Load a graph from an edge list file, one `from to` pair per line
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<GraphBuilder> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut graph = GraphBuilder::new();
    let links = read_edges(BufReader::new(file), &mut graph)?;

    log::info!("Loaded {} links between {} labels", links, graph.len());

    Ok(graph)
}

/// Record every edge from `reader` into `graph`, returning the number of links read
///
/// Lines containing a tab split on the first tab and keep both sides verbatim,
/// so labels may contain spaces or be empty. Other lines must hold exactly two
/// whitespace separated fields. Blank lines and `#` comments are skipped.
pub fn read_edges<R: BufRead>(reader: R, graph: &mut GraphBuilder) -> Result<usize> {
    let mut links = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_no + 1))?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let (from, to) = parse_edge(line).ok_or_else(|| {
            anyhow!("line {}: expected two labels, got {:?}", line_no + 1, line)
        })?;

        graph.link(from, to);
        links += 1;
    }

    Ok(links)
}

fn parse_edge(line: &str) -> Option<(&str, &str)> {
    if let Some((from, to)) = line.split_once('\t') {
        return Some((from, to));
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(from), Some(to), None) => Some((from, to)),
        _ => None,
    }
}
