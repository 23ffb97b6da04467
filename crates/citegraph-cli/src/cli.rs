//! Command-line argument definitions.

use crate::config::{CliConfig, OutputFormat};
use citegraph_core::ArticleId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Citegraph - citation graph analytics
#[derive(Parser, Debug)]
#[command(name = "citegraph")]
#[command(author, version, about = "Citation graph structural metrics", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "CITEGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Citation input file (.json or .csv); the sample graph is used otherwise
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Article removed before counting weak components
    #[arg(long)]
    pub target: Option<ArticleId>,

    /// Article whose referencing index and indirect citations are reported
    #[arg(long)]
    pub focus: Option<ArticleId>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Run every analytic and print a report (default)
    #[default]
    Report,
    /// Print summary statistics
    Stats,
    /// Print the graph in Graphviz DOT format
    Dot,
}

impl Args {
    /// Returns the command to run, defaulting to `report`.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or_default()
    }

    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(target) = self.target {
            config.analysis.removal_target = target;
        }
        if let Some(focus) = self.focus {
            config.analysis.focus = focus;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["citegraph"]);
        assert_eq!(args.selected_command(), Command::Report);
        assert!(args.input.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_subcommand_and_overrides() {
        let args = Args::parse_from([
            "citegraph",
            "--target",
            "3",
            "--focus",
            "5",
            "--format",
            "json",
            "stats",
        ]);
        assert_eq!(args.selected_command(), Command::Stats);

        let mut config = CliConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.analysis.removal_target, ArticleId::new(3));
        assert_eq!(config.analysis.focus, ArticleId::new(5));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_non_integer_target() {
        assert!(Args::try_parse_from(["citegraph", "--target", "abc"]).is_err());
    }

    #[test]
    fn test_args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
