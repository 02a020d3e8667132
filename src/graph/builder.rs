//! Graph construction module

use serde::{Deserialize, Serialize};

use crate::graph::interner::LabelInterner;

/// Summary statistics over the recorded links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    pub node_count: usize,
    pub edge_count: usize,

    /// Nodes without outgoing links
    pub dangling_count: usize,

    /// Links whose source and target are the same node
    pub self_loop_count: usize,

    pub max_in_degree: usize,
    pub max_out_degree: usize,
}

/// Builder for incrementally recording labeled links
///
/// Links are stored transposed: for each node the sources pointing at it,
/// which is the access pattern the rank solver needs. Repeated links are kept
/// as repeated entries and counted again in the source's out-degree.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    /// Label to node index mapping
    labels: LabelInterner,

    /// Incoming sources for each node
    incoming: Vec<Vec<u32>>,

    /// Outgoing link counts
    out_degrees: Vec<u32>,

    /// Total recorded links
    edge_count: usize,
}

impl GraphBuilder {
    /// Create an empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: LabelInterner::with_capacity(capacity),
            incoming: Vec::with_capacity(capacity),
            out_degrees: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Get or create a node index for the given label
    fn get_or_create_node(&mut self, label: &str) -> u32 {
        let idx = self.labels.intern(label);

        // New nodes start with no incoming links and zero out-degree
        if self.incoming.len() < self.labels.len() {
            self.incoming.resize_with(self.labels.len(), Vec::new);
            self.out_degrees.resize(self.labels.len(), 0);
        }

        idx
    }

    /// Record a link from one label to another
    pub fn link(&mut self, from: &str, to: &str) {
        let from_idx = self.get_or_create_node(from);
        let to_idx = self.get_or_create_node(to);

        self.incoming[to_idx as usize].push(from_idx);
        self.out_degrees[from_idx as usize] += 1;
        self.edge_count += 1;
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of recorded links, parallel links included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sources of every link into `node`, one entry per link
    pub fn incoming(&self, node: usize) -> &[u32] {
        &self.incoming[node]
    }

    /// Number of links recorded out of `node`
    pub fn out_degree(&self, node: usize) -> u32 {
        self.out_degrees[node]
    }

    pub fn label(&self, node: u32) -> Option<&str> {
        self.labels.label(node)
    }

    pub fn index_of(&self, label: &str) -> Option<u32> {
        self.labels.get(label)
    }

    /// Labels in node index order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.labels()
    }

    /// Nodes with no outgoing links
    pub fn dangling_nodes(&self) -> Vec<u32> {
        self.out_degrees
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| node as u32)
            .collect()
    }

    /// Collect node and degree statistics
    pub fn degree_summary(&self) -> DegreeSummary {
        let mut summary = DegreeSummary {
            node_count: self.len(),
            edge_count: self.edge_count,
            ..Default::default()
        };

        for (node, sources) in self.incoming.iter().enumerate() {
            summary.max_in_degree = summary.max_in_degree.max(sources.len());
            summary.self_loop_count += sources.iter().filter(|&&src| src as usize == node).count();
        }

        for &degree in &self.out_degrees {
            summary.max_out_degree = summary.max_out_degree.max(degree as usize);
            if degree == 0 {
                summary.dangling_count += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_creates_nodes_in_first_seen_order() {
        let mut graph = GraphBuilder::new();
        graph.link("a", "b");
        graph.link("c", "a");

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(graph.incoming(0), &[2]);
        assert_eq!(graph.incoming(1), &[0]);
        assert!(graph.incoming(2).is_empty());
    }

    #[test]
    fn repeated_links_are_extra_votes() {
        let mut graph = GraphBuilder::new();
        for _ in 0..3 {
            graph.link("x", "y");
        }

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(0), 3);
        assert_eq!(graph.incoming(1), &[0, 0, 0]);
    }

    #[test]
    fn self_loop_counts_both_ways() {
        let mut graph = GraphBuilder::new();
        graph.link("s", "s");

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.out_degree(0), 1);
        assert_eq!(graph.incoming(0), &[0]);
        assert!(graph.dangling_nodes().is_empty());
    }

    #[test]
    fn out_degree_matches_incoming_appearances() {
        let mut graph = GraphBuilder::with_capacity(8);
        let links = [("a", "b"), ("a", "c"), ("b", "c"), ("c", "a"), ("a", "b"), ("d", "d")];
        for (from, to) in links {
            graph.link(from, to);
        }

        for node in 0..graph.len() {
            let appearances: usize = (0..graph.len())
                .map(|target| {
                    graph
                        .incoming(target)
                        .iter()
                        .filter(|&&src| src as usize == node)
                        .count()
                })
                .sum();
            assert_eq!(appearances, graph.out_degree(node) as usize);
        }
    }

    #[test]
    fn dangling_nodes_have_no_out_links() {
        let mut graph = GraphBuilder::new();
        graph.link("a", "b");
        graph.link("b", "c");
        graph.link("a", "d");

        assert_eq!(graph.dangling_nodes(), vec![2, 3]);
    }

    #[test]
    fn degree_summary_counts() {
        let mut graph = GraphBuilder::new();
        graph.link("a", "b");
        graph.link("a", "b");
        graph.link("c", "b");
        graph.link("c", "c");

        let summary = graph.degree_summary();
        assert_eq!(
            summary,
            DegreeSummary {
                node_count: 3,
                edge_count: 4,
                dangling_count: 1,
                self_loop_count: 1,
                max_in_degree: 3,
                max_out_degree: 2,
            }
        );
    }
}
