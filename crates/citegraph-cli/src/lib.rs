//! # citegraph-cli
//!
//! Command-line driver for Citegraph.
//!
//! Loads a citation graph (the built-in sample or a JSON/CSV file), runs
//! the analytics and prints a report, statistics, or a DOT rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod report;

pub use cli::{Args, Command};
pub use config::{AnalysisConfig, CliConfig, OutputConfig, OutputFormat};
pub use report::{sample_graph, AnalysisReport, FocusReport};

use citegraph::{compute_stats, to_dot, CitationGraph, GraphBuilder};
use citegraph_core::{Error, Result};

/// Load the graph named by the configuration, or the sample graph.
pub fn load_graph(config: &CliConfig) -> Result<CitationGraph> {
    match &config.input {
        Some(path) => {
            let (graph, stats) = GraphBuilder::new().with_input(path).build()?;
            tracing::info!(
                path = %path.display(),
                articles = stats.articles_created,
                citations = stats.citations_created,
                duplicates = stats.duplicate_citations,
                "Loaded citation graph"
            );
            Ok(graph)
        }
        None => {
            tracing::info!("No input given, using the sample citation graph");
            Ok(sample_graph())
        }
    }
}

/// Execute a command and return the text to print on stdout.
pub fn execute(command: &Command, config: &CliConfig, graph: &CitationGraph) -> Result<String> {
    match command {
        Command::Report => {
            let report = AnalysisReport::run(graph, &config.analysis);
            for message in &report.errors {
                tracing::warn!("{message}");
            }
            match config.output.format {
                OutputFormat::Text => Ok(report.render_text()),
                OutputFormat::Json => to_json(&report),
            }
        }
        Command::Stats => {
            let stats = compute_stats(graph);
            match config.output.format {
                OutputFormat::Text => Ok(format!(
                    "Articles: {}\nCitations: {}\nIsolated articles: {}\nSelf-citations: {}\nMax in-degree: {}\nMax out-degree: {}\n",
                    stats.article_count,
                    stats.citation_count,
                    stats.isolated_articles,
                    stats.self_citations,
                    stats.max_in_degree,
                    stats.max_out_degree
                )),
                OutputFormat::Json => to_json(&stats),
            }
        }
        Command::Dot => Ok(to_dot(graph)),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Reject option combinations that cannot be honoured.
pub fn validate(command: &Command, config: &CliConfig) -> Result<()> {
    if matches!(command, Command::Dot) && config.output.format == OutputFormat::Json {
        return Err(Error::config("DOT output cannot be rendered as JSON"));
    }
    Ok(())
}
