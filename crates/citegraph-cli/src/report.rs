//! The analysis report printed by `citegraph report`.

use crate::config::AnalysisConfig;
use citegraph::{
    indirect_citations, most_cited_article, referencing_index, weak_components_without,
    CitationGraph,
};
use citegraph_core::ArticleId;
use serde::Serialize;

/// Citations of the sample graph: 1→2, 1→3, 3→4, 2→4, 5→1.
const SAMPLE_CITATIONS: [(i64, i64); 5] = [(1, 2), (1, 3), (3, 4), (2, 4), (5, 1)];

/// Builds the sample graph used when no input file is given.
pub fn sample_graph() -> CitationGraph {
    let mut graph = CitationGraph::new();
    for (origin, target) in SAMPLE_CITATIONS {
        graph.add_citation(origin, target);
    }
    graph
}

/// Metrics for the focus article.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FocusReport {
    /// The focus article.
    pub id: ArticleId,
    /// Referencing index; `None` when the article cites nothing.
    pub referencing_index: Option<f64>,
    /// Articles cited indirectly.
    pub indirect_citations: Vec<ArticleId>,
    /// Number of articles cited indirectly.
    pub indirect_citation_count: usize,
}

/// Results of every analytic over one graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Number of articles.
    pub article_count: usize,
    /// Number of citations.
    pub citation_count: usize,
    /// Most cited article; `None` for an empty graph.
    pub most_cited: Option<ArticleId>,
    /// Article removed before counting components.
    pub removal_target: ArticleId,
    /// Weak components left after removing `removal_target`.
    pub components_after_removal: usize,
    /// Focus article metrics; `None` when the focus article is unknown.
    pub focus: Option<FocusReport>,
    /// Failures encountered while computing the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl AnalysisReport {
    /// Run the analytics. The graph is left untouched.
    ///
    /// An unknown focus article is recorded in `errors` rather than aborting
    /// the report, so the graph-wide metrics are still produced.
    pub fn run(graph: &CitationGraph, config: &AnalysisConfig) -> Self {
        let mut errors = Vec::new();

        let focus = match (
            referencing_index(graph, config.focus),
            indirect_citations(graph, config.focus),
        ) {
            (Ok(index), Ok(indirect)) => Some(FocusReport {
                id: config.focus,
                referencing_index: index.as_option(),
                indirect_citation_count: indirect.len(),
                indirect_citations: indirect.into_iter().collect(),
            }),
            (Err(e), _) | (_, Err(e)) => {
                errors.push(e.to_string());
                None
            }
        };

        Self {
            article_count: graph.article_count(),
            citation_count: graph.citation_count(),
            most_cited: most_cited_article(graph),
            removal_target: config.removal_target,
            components_after_removal: weak_components_without(graph, config.removal_target),
            focus,
            errors,
        }
    }

    /// Render the report as human-readable lines.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(match self.most_cited {
            Some(id) => format!("Most cited article: {id}"),
            None => "Most cited article: none (empty graph)".to_string(),
        });
        lines.push(format!(
            "Groups after removing article {}: {}",
            self.removal_target, self.components_after_removal
        ));

        if let Some(focus) = &self.focus {
            lines.push(match focus.referencing_index {
                Some(index) => format!("Referencing index of article {}: {index}", focus.id),
                None => format!(
                    "Referencing index of article {}: undefined (no citations made)",
                    focus.id
                ),
            });
            lines.push(format!(
                "Indirect citations made by article {}: {}",
                focus.id, focus.indirect_citation_count
            ));
        }

        lines.extend(self.errors.iter().map(|error| format!("Error: {error}")));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
