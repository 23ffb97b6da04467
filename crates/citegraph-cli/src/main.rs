//! Citegraph CLI
//!
//! Command-line interface for citation graph analytics.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use citegraph_cli::{execute, load_graph, validate, Args, CliConfig};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout is reserved for command output.
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config =
        CliConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let command = args.selected_command();
    validate(&command, &config)?;

    let graph = load_graph(&config).context("Failed to load citation graph")?;
    tracing::debug!(
        articles = graph.article_count(),
        citations = graph.citation_count(),
        command = ?command,
        "Running command"
    );

    let output = execute(&command, &config, &graph)?;
    print!("{output}");

    Ok(())
}
