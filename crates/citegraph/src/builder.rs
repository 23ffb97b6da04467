//! GraphBuilder for constructing citation graphs from records.
//!
//! The builder collects articles and citations from code or from a file,
//! then builds the `CitationGraph` in two phases:
//!
//! 1. Declare every standalone article (articles with no citations yet)
//! 2. Add every citation, counting duplicates instead of storing them twice
//!
//! Supported file formats:
//!
//! - **JSON**: an array of `{"origin": 1, "target": 2}` records, or an object
//!   `{"articles": [...], "citations": [...]}`. `from`/`to` are accepted as
//!   aliases for `origin`/`target`.
//! - **CSV**: a header row `origin,target` followed by one citation per row.

use crate::{Citation, CitationGraph};
use citegraph_core::{ArticleId, Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Builder input types
// ============================================================================

/// Format of a citation input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON records.
    Json,
    /// CSV with an `origin,target` header.
    Csv,
}

impl InputFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::config(format!("Unknown input format '{other}'"))),
        }
    }
}

/// One citation as it appears in an input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// The citing article.
    #[serde(alias = "from")]
    pub origin: ArticleId,
    /// The cited article.
    #[serde(alias = "to")]
    pub target: ArticleId,
}

impl From<CitationRecord> for Citation {
    fn from(record: CitationRecord) -> Self {
        Citation {
            origin: record.origin,
            target: record.target,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInput {
    Records(Vec<CitationRecord>),
    Document(JsonDocument),
}

// `citations` is required so a stray object cannot load as an empty graph.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonDocument {
    #[serde(default)]
    articles: Vec<ArticleId>,
    citations: Vec<CitationRecord>,
}

/// Statistics from a graph build operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Citation records read from all inputs.
    pub records_read: usize,
    /// Articles in the built graph.
    pub articles_created: usize,
    /// Distinct citations stored.
    pub citations_created: usize,
    /// Records that repeated an existing citation.
    pub duplicate_citations: usize,
}

// ============================================================================
// GraphBuilder
// ============================================================================

/// Builder for constructing citation graphs.
///
/// # Example
///
/// ```rust
/// use citegraph::GraphBuilder;
///
/// let (graph, stats) = GraphBuilder::new()
///     .with_citation(1, 2)
///     .with_citation(1, 2)
///     .with_article(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.article_count(), 3);
/// assert_eq!(stats.duplicate_citations, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    input_path: Option<PathBuf>,
    input_format: Option<InputFormat>,
    articles: Vec<ArticleId>,
    citations: Vec<CitationRecord>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads citations from a file when building.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Overrides extension-based format detection for the input file.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    /// Declares an article, even if nothing cites it.
    pub fn with_article(mut self, id: impl Into<ArticleId>) -> Self {
        self.articles.push(id.into());
        self
    }

    /// Adds a single citation.
    pub fn with_citation(
        mut self,
        origin: impl Into<ArticleId>,
        target: impl Into<ArticleId>,
    ) -> Self {
        self.citations.push(CitationRecord {
            origin: origin.into(),
            target: target.into(),
        });
        self
    }

    /// Adds citation records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = CitationRecord>) -> Self {
        self.citations.extend(records);
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    ///
    /// Fails if the input file cannot be read or parsed, or if its format
    /// cannot be determined.
    pub fn build(mut self) -> Result<(CitationGraph, BuildStats)> {
        if let Some(path) = self.input_path.take() {
            let format = match self.input_format {
                Some(format) => format,
                None => InputFormat::from_path(&path).ok_or_else(|| {
                    Error::config(format!(
                        "Cannot detect input format of {}; use a .json or .csv extension",
                        path.display()
                    ))
                })?,
            };
            let file = std::fs::File::open(&path).map_err(|e| Error::io_with_path(e, &path))?;
            let (articles, citations) = read_records(file, format)?;
            log::debug!(
                "Loaded {} citations and {} articles from {}",
                citations.len(),
                articles.len(),
                path.display()
            );
            self.articles.extend(articles);
            self.citations.extend(citations);
        }

        let mut graph = CitationGraph::new();
        let mut stats = BuildStats {
            records_read: self.citations.len(),
            ..BuildStats::default()
        };

        // Phase 1: standalone articles
        for id in &self.articles {
            graph.add_article(*id);
        }

        // Phase 2: citations
        for record in &self.citations {
            if !graph.add_citation(record.origin, record.target) {
                log::warn!(
                    "Duplicate citation {} -> {} ignored",
                    record.origin,
                    record.target
                );
                stats.duplicate_citations += 1;
            }
        }

        stats.articles_created = graph.article_count();
        stats.citations_created = graph.citation_count();
        Ok((graph, stats))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Read articles and citation records in the given format.
pub fn read_records<R: Read>(
    reader: R,
    format: InputFormat,
) -> Result<(Vec<ArticleId>, Vec<CitationRecord>)> {
    match format {
        InputFormat::Json => {
            let input: JsonInput = serde_json::from_reader(reader)?;
            Ok(match input {
                JsonInput::Records(citations) => (Vec::new(), citations),
                JsonInput::Document(document) => (document.articles, document.citations),
            })
        }
        InputFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            let citations = csv_reader
                .deserialize::<CitationRecord>()
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok((Vec::new(), citations))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
