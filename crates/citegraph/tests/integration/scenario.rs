//! Integration tests for the reference citation scenario.

use citegraph::{
    indirect_citations_made, most_cited_article, referencing_index, to_digraph, weak_components,
    weak_components_after_removal, weak_components_without, ArticleId, CitationGraph,
    ReferencingIndex,
};
use petgraph::algo::connected_components;
use proptest::prelude::*;

use crate::common::scenario_graph;

#[test]
fn test_scenario_degrees() {
    let graph = scenario_graph();
    let in_degrees: Vec<usize> = graph
        .article_ids()
        .into_iter()
        .map(|id| graph.in_degree(id))
        .collect();
    assert_eq!(in_degrees, vec![1, 1, 1, 2, 0]);
}

#[test]
fn test_scenario_most_cited() {
    assert_eq!(most_cited_article(&scenario_graph()), Some(ArticleId::new(4)));
}

#[test]
fn test_scenario_components_on_copy() {
    let graph = scenario_graph();
    let mut copy = graph.clone();

    assert_eq!(weak_components_after_removal(&mut copy, 1), 2);
    assert!(!copy.exists(1));
    assert!(graph.exists(1));
    assert_eq!(weak_components_without(&graph, 1), 2);
}

#[test]
fn test_scenario_referencing_index() {
    let graph = scenario_graph();
    assert_eq!(
        referencing_index(&graph, 1).unwrap(),
        ReferencingIndex::Defined(1.0)
    );
}

#[test]
fn test_scenario_indirect_citations() {
    let graph = scenario_graph();
    assert_eq!(indirect_citations_made(&graph, 1).unwrap(), 1);
}

#[test]
fn test_analytics_reject_unknown_article() {
    let graph = scenario_graph();
    assert!(!graph.exists(6));
    assert!(referencing_index(&graph, 6).unwrap_err().is_invalid_argument());
    assert!(indirect_citations_made(&graph, 6).unwrap_err().is_invalid_argument());
}

proptest! {
    #[test]
    fn test_weak_components_match_petgraph(
        edges in prop::collection::vec((0i64..15, 0i64..15), 0..30),
        isolated in prop::collection::vec(15i64..20, 0..4),
    ) {
        let mut graph = CitationGraph::new();
        for &(a, b) in &edges {
            graph.add_citation(a, b);
        }
        for &n in &isolated {
            graph.add_article(n);
        }

        let components = weak_components(&graph);
        prop_assert_eq!(components.len(), connected_components(&to_digraph(&graph)));

        let total: usize = components.iter().map(Vec::len).sum();
        prop_assert_eq!(total, graph.article_count());
    }
}
