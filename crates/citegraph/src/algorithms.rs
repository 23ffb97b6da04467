//! Graph algorithms for citation analysis.
//!
//! Provides algorithms for:
//! - Most-cited lookup (maximum in-degree, lowest id on ties)
//! - Weak connectivity (components ignoring edge direction, optionally
//!   after removing an article)
//! - Referencing index (citations received relative to citations made)
//! - Indirect citations (articles reached in exactly two hops)
//! - Summary statistics
//!
//! All algorithms are stateless and operate on `CitationGraph`. Only
//! [`weak_components_after_removal`] mutates its argument.

use crate::CitationGraph;
use citegraph_core::{ArticleId, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

// ============================================================================
// Result types
// ============================================================================

/// Referencing index of an article.
///
/// The ratio is undefined for an article that cites nothing; that is an
/// expected outcome rather than an error, so it gets its own variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferencingIndex {
    /// `received / (0.5 * made)`.
    Defined(f64),
    /// The article makes no citations.
    Undefined,
}

impl ReferencingIndex {
    /// Returns the ratio, with `NaN` standing in for `Undefined`.
    pub fn value(self) -> f64 {
        match self {
            Self::Defined(value) => value,
            Self::Undefined => f64::NAN,
        }
    }

    /// Returns the ratio if it is defined.
    pub fn as_option(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Returns `true` for [`ReferencingIndex::Defined`].
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for ReferencingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(value) => write!(f, "{value}"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

/// Summary statistics for a citation graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of known articles.
    pub article_count: usize,
    /// Number of distinct citations.
    pub citation_count: usize,
    /// Articles that neither cite nor are cited.
    pub isolated_articles: usize,
    /// Articles that cite themselves.
    pub self_citations: usize,
    /// Largest in-degree in the graph.
    pub max_in_degree: usize,
    /// Largest out-degree in the graph.
    pub max_out_degree: usize,
}

// ============================================================================
// Algorithms
// ============================================================================

/// Find the article cited by the most other articles.
///
/// Ties go to the first article in [`CitationGraph::article_ids`] order,
/// i.e. the lowest id. Returns `None` for an empty graph.
pub fn most_cited_article(graph: &CitationGraph) -> Option<ArticleId> {
    let mut best: Option<(ArticleId, usize)> = None;

    for id in graph.article_ids() {
        let received = graph.in_degree(id);
        match best {
            Some((_, max)) if received <= max => {}
            _ => best = Some((id, received)),
        }
    }

    best.map(|(id, _)| id)
}

/// Partition the graph into weakly-connected components.
///
/// Breadth-first search seeded from each unvisited article in
/// [`CitationGraph::article_ids`] order, following citations in both
/// directions. Members of each component are listed in visit order.
pub fn weak_components(graph: &CitationGraph) -> Vec<Vec<ArticleId>> {
    let mut visited: HashSet<ArticleId> = HashSet::new();
    let mut components: Vec<Vec<ArticleId>> = Vec::new();

    for seed in graph.article_ids() {
        if visited.contains(&seed) {
            continue;
        }

        let mut members: Vec<ArticleId> = Vec::new();
        let mut queue: VecDeque<ArticleId> = VecDeque::new();
        visited.insert(seed);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            members.push(current);

            let neighbours = graph
                .citations_made_by(current)
                .into_iter()
                .chain(graph.cited_by(current));

            for neighbour in neighbours {
                // Stale references cannot occur while the invariants hold.
                if !graph.exists(neighbour) {
                    continue;
                }
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        log::trace!(
            "Component {} seeded at {seed}: {} articles",
            components.len(),
            members.len()
        );
        components.push(members);
    }

    components
}

/// Remove `target` from `graph` and count the weak components left.
///
/// Destructive: the article is removed from the graph passed in (no-op if
/// it is absent). Use [`weak_components_without`] to keep the graph intact.
pub fn weak_components_after_removal(
    graph: &mut CitationGraph,
    target: impl Into<ArticleId>,
) -> usize {
    graph.remove_article(target);
    weak_components(graph).len()
}

/// Count the weak components that removing `target` would leave.
///
/// Runs [`weak_components_after_removal`] on a copy of `graph`.
pub fn weak_components_without(graph: &CitationGraph, target: impl Into<ArticleId>) -> usize {
    let mut copy = graph.clone();
    weak_components_after_removal(&mut copy, target)
}

/// Compute the referencing index of an article.
///
/// Defined as `received / (0.5 * made)`, where `received` is the in-degree
/// and `made` the out-degree. Undefined when the article cites nothing.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `id` is not in the graph.
pub fn referencing_index(
    graph: &CitationGraph,
    id: impl Into<ArticleId>,
) -> Result<ReferencingIndex> {
    let id = id.into();
    if !graph.exists(id) {
        return Err(Error::unknown_article(id));
    }

    let received = graph.in_degree(id);
    let made = graph.out_degree(id);
    if made == 0 {
        return Ok(ReferencingIndex::Undefined);
    }

    let denominator = 0.5 * made as f64;
    Ok(ReferencingIndex::Defined(received as f64 / denominator))
}

/// Collect the articles `origin` cites indirectly.
///
/// An indirect citation is an article reached through exactly one
/// intermediate citation that is neither `origin` nor one of its direct
/// citations.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `origin` is not in the graph.
pub fn indirect_citations(
    graph: &CitationGraph,
    origin: impl Into<ArticleId>,
) -> Result<BTreeSet<ArticleId>> {
    let origin = origin.into();
    if !graph.exists(origin) {
        return Err(Error::unknown_article(origin));
    }

    let direct = graph.citations_made_by(origin);
    let direct_set: HashSet<ArticleId> = direct.iter().copied().collect();
    let mut found: BTreeSet<ArticleId> = BTreeSet::new();

    for intermediate in direct {
        if !graph.exists(intermediate) {
            continue;
        }
        for candidate in graph.citations_made_by(intermediate) {
            if !graph.exists(candidate) {
                continue;
            }
            if candidate != origin && !direct_set.contains(&candidate) {
                found.insert(candidate);
            }
        }
    }

    Ok(found)
}

/// Count the distinct articles `origin` cites indirectly.
///
/// See [`indirect_citations`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `origin` is not in the graph.
pub fn indirect_citations_made(
    graph: &CitationGraph,
    origin: impl Into<ArticleId>,
) -> Result<usize> {
    indirect_citations(graph, origin).map(|found| found.len())
}

/// Compute summary statistics.
pub fn compute_stats(graph: &CitationGraph) -> GraphStats {
    let mut stats = GraphStats {
        article_count: graph.article_count(),
        citation_count: graph.citation_count(),
        ..GraphStats::default()
    };

    for id in graph.article_ids() {
        let in_deg = graph.in_degree(id);
        let out_deg = graph.out_degree(id);

        if in_deg == 0 && out_deg == 0 {
            stats.isolated_articles += 1;
        }
        if graph.contains_citation(id, id) {
            stats.self_citations += 1;
        }
        stats.max_in_degree = stats.max_in_degree.max(in_deg);
        stats.max_out_degree = stats.max_out_degree.max(out_deg);
    }

    stats
}

// ============================================================================
// Tests
// ============================================================================
