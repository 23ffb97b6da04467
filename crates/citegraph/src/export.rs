//! petgraph view and Graphviz rendering of a citation graph.

use crate::CitationGraph;
use citegraph_core::ArticleId;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Edge weight used for every citation in the petgraph view.
pub const CITES: &str = "cites";

/// Build a petgraph `DiGraph` mirroring `graph`.
///
/// Nodes are added in [`CitationGraph::article_ids`] order, so node index
/// `i` holds the `i`-th article id.
pub fn to_digraph(graph: &CitationGraph) -> DiGraph<ArticleId, &'static str> {
    let mut digraph = DiGraph::with_capacity(graph.article_count(), graph.citation_count());
    let mut indices: HashMap<ArticleId, NodeIndex> = HashMap::new();

    for id in graph.article_ids() {
        indices.insert(id, digraph.add_node(id));
    }
    for citation in graph.citations() {
        if let (Some(&from), Some(&to)) =
            (indices.get(&citation.origin), indices.get(&citation.target))
        {
            digraph.add_edge(from, to, CITES);
        }
    }

    digraph
}

/// Render `graph` in Graphviz DOT format.
pub fn to_dot(graph: &CitationGraph) -> String {
    let digraph = to_digraph(graph);
    format!("{}", Dot::with_config(&digraph, &[Config::EdgeNoLabel]))
}
