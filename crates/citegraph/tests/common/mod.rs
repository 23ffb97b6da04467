//! Common test utilities for citegraph integration tests.

use citegraph::CitationGraph;
use std::io::Write;
use tempfile::NamedTempFile;

/// Citations of the reference scenario: 1→2, 1→3, 3→4, 2→4, 5→1.
pub const SCENARIO_EDGES: [(i64, i64); 5] = [(1, 2), (1, 3), (3, 4), (2, 4), (5, 1)];

/// Builds the reference scenario graph.
pub fn scenario_graph() -> CitationGraph {
    let mut graph = CitationGraph::new();
    for (origin, target) in SCENARIO_EDGES {
        graph.add_citation(origin, target);
    }
    graph
}

/// Writes `contents` to a temporary file with the given extension.
pub fn temp_input(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
