//! Core citation graph type.
//!
//! `CitationGraph` keeps two ordered adjacency maps: the citations each
//! article makes, and the articles citing it. The second map is the exact
//! transpose of the first and every mutation updates both.

use citegraph_core::ArticleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Citation struct
// ============================================================================

/// A directed citation: `origin` cites `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    /// The citing article.
    pub origin: ArticleId,
    /// The cited article.
    pub target: ArticleId,
}

impl Citation {
    /// Creates a citation from `origin` to `target`.
    pub fn new(origin: impl Into<ArticleId>, target: impl Into<ArticleId>) -> Self {
        Self {
            origin: origin.into(),
            target: target.into(),
        }
    }
}

// ============================================================================
// CitationGraph struct
// ============================================================================

/// Directed citation graph with a maintained reverse index.
///
/// Invariants:
/// - `outgoing` and `incoming` have the same key set (the known articles).
/// - `b` is in `outgoing[a]` iff `a` is in `incoming[b]`.
/// - adjacency lists hold distinct ids in insertion order.
///
/// Self-citations are stored like any other edge. `Clone` is a deep copy,
/// which is what destructive analytics expect callers to hand them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CitationGraph {
    outgoing: BTreeMap<ArticleId, Vec<ArticleId>>,
    incoming: BTreeMap<ArticleId, Vec<ArticleId>>,
}

impl CitationGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of known articles.
    pub fn article_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of distinct citations.
    pub fn citation_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no articles.
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    // ========================================================================
    // Mutation API
    // ========================================================================

    /// Ensures an article exists. Idempotent.
    pub fn add_article(&mut self, id: impl Into<ArticleId>) {
        let id = id.into();
        self.outgoing.entry(id).or_default();
        self.incoming.entry(id).or_default();
    }

    /// Records that `origin` cites `target`, creating either article if needed.
    ///
    /// Returns `true` if the citation is new, `false` if it was already present.
    pub fn add_citation(
        &mut self,
        origin: impl Into<ArticleId>,
        target: impl Into<ArticleId>,
    ) -> bool {
        let origin = origin.into();
        let target = target.into();
        self.add_article(origin);
        self.add_article(target);

        let cited = self.outgoing.entry(origin).or_default();
        if cited.contains(&target) {
            return false;
        }
        cited.push(target);
        self.incoming.entry(target).or_default().push(origin);
        true
    }

    /// Removes an article and every citation to or from it.
    ///
    /// Scans all remaining adjacency lists. Returns `false` if the article
    /// was unknown, in which case nothing changes.
    pub fn remove_article(&mut self, id: impl Into<ArticleId>) -> bool {
        let id = id.into();
        if !self.exists(id) {
            return false;
        }

        self.outgoing.remove(&id);
        self.incoming.remove(&id);

        for cited in self.outgoing.values_mut() {
            cited.retain(|&other| other != id);
        }
        for citing in self.incoming.values_mut() {
            citing.retain(|&other| other != id);
        }

        log::debug!("Removed article {id}; {} articles remain", self.article_count());
        true
    }

    // ========================================================================
    // Query API
    // ========================================================================

    /// Checks if an article is known.
    pub fn exists(&self, id: impl Into<ArticleId>) -> bool {
        let id = id.into();
        self.outgoing.contains_key(&id)
    }

    /// Checks if `origin` cites `target`.
    pub fn contains_citation(
        &self,
        origin: impl Into<ArticleId>,
        target: impl Into<ArticleId>,
    ) -> bool {
        let origin = origin.into();
        let target = target.into();
        self.outgoing
            .get(&origin)
            .is_some_and(|cited| cited.contains(&target))
    }

    /// Returns all known article ids in ascending order, each exactly once.
    pub fn article_ids(&self) -> Vec<ArticleId> {
        self.outgoing.keys().copied().collect()
    }

    /// Number of articles citing `id`; 0 for an unknown article.
    pub fn in_degree(&self, id: impl Into<ArticleId>) -> usize {
        let id = id.into();
        self.incoming.get(&id).map_or(0, Vec::len)
    }

    /// Number of articles `id` cites; 0 for an unknown article.
    pub fn out_degree(&self, id: impl Into<ArticleId>) -> usize {
        let id = id.into();
        self.outgoing.get(&id).map_or(0, Vec::len)
    }

    /// Articles cited by `id`, in insertion order. Empty for an unknown article.
    pub fn citations_made_by(&self, id: impl Into<ArticleId>) -> Vec<ArticleId> {
        let id = id.into();
        self.outgoing.get(&id).cloned().unwrap_or_default()
    }

    /// Articles citing `id`, in insertion order. Empty for an unknown article.
    pub fn cited_by(&self, id: impl Into<ArticleId>) -> Vec<ArticleId> {
        let id = id.into();
        self.incoming.get(&id).cloned().unwrap_or_default()
    }

    /// Iterates over every citation, grouped by origin in ascending id order.
    pub fn citations(&self) -> impl Iterator<Item = Citation> + '_ {
        self.outgoing.iter().flat_map(|(&origin, cited)| {
            cited.iter().map(move |&target| Citation { origin, target })
        })
    }
}

impl FromIterator<Citation> for CitationGraph {
    fn from_iter<I: IntoIterator<Item = Citation>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Citation> for CitationGraph {
    fn extend<I: IntoIterator<Item = Citation>>(&mut self, iter: I) {
        for citation in iter {
            self.add_citation(citation.origin, citation.target);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
