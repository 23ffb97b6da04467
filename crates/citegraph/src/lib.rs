//! Citegraph — directed citation graphs and their structural metrics.
//!
//! # Modules
//!
//! - [`graph`]: `CitationGraph`, the bidirectional adjacency store
//! - [`algorithms`]: Stateless analytics (most cited, weak components,
//!   referencing index, indirect citations, statistics)
//! - [`builder`]: Load citation records from JSON or CSV
//! - [`export`]: petgraph view and Graphviz DOT rendering
//!
//! # Example
//!
//! ```rust
//! use citegraph::{most_cited_article, weak_components_without, ArticleId, CitationGraph};
//!
//! let mut graph = CitationGraph::new();
//! graph.add_citation(1, 2);
//! graph.add_citation(3, 2);
//!
//! assert_eq!(most_cited_article(&graph), Some(ArticleId::new(2)));
//! assert_eq!(weak_components_without(&graph, 2), 2);
//! assert!(graph.exists(2));
//! ```

pub mod algorithms;
pub mod builder;
pub mod export;
pub mod graph;

pub use algorithms::{
    compute_stats, indirect_citations, indirect_citations_made, most_cited_article,
    referencing_index, weak_components, weak_components_after_removal, weak_components_without,
    GraphStats, ReferencingIndex,
};
pub use builder::{read_records, BuildStats, CitationRecord, GraphBuilder, InputFormat};
pub use export::{to_digraph, to_dot};
pub use graph::{Citation, CitationGraph};

pub use citegraph_core::{ArticleId, Error, Result};
