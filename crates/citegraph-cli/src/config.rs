//! Configuration for the Citegraph CLI.
//!
//! Loaded from an optional TOML file; every field has a default, so an
//! empty file (or no file) is a valid configuration.
//!
//! ```toml
//! input = "citations.csv"
//!
//! [analysis]
//! removal_target = 1
//! focus = 1
//!
//! [output]
//! format = "text"
//! ```

use citegraph_core::{ArticleId, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Article used for removal and focus when none is configured.
pub const DEFAULT_ARTICLE: ArticleId = ArticleId::new(1);

// ============================================================================
// Config sections
// ============================================================================

/// Output rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Which articles the report analyses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Article removed before counting weak components.
    pub removal_target: ArticleId,
    /// Article whose referencing index and indirect citations are reported.
    pub focus: ArticleId,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            removal_target: DEFAULT_ARTICLE,
            focus: DEFAULT_ARTICLE,
        }
    }
}

/// Output settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
}

/// Top-level CLI configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Citation input file; the sample graph is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    /// Analysis settings.
    pub analysis: AnalysisConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A relative `input` path is resolved against the config file's directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let mut config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

        if let (Some(input), Some(dir)) = (&config.input, path.parent())
            && input.is_relative()
        {
            config.input = Some(dir.join(input));
        }

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.input.is_none());
        assert_eq!(config.analysis.removal_target, ArticleId::new(1));
        assert_eq!(config.analysis.focus, ArticleId::new(1));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = CliConfig::from_toml_str("[analysis]\nfocus = 5\n").unwrap();
        assert_eq!(config.analysis.focus, ArticleId::new(5));
        assert_eq!(config.analysis.removal_target, ArticleId::new(1));
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
input = "/data/citations.json"

[analysis]
removal_target = 3
focus = 2

[output]
format = "json"
"#;
        let config = CliConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("/data/citations.json")));
        assert_eq!(config.analysis.removal_target, ArticleId::new(3));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = CliConfig::default();
        config.analysis.focus = ArticleId::new(9);
        let parsed = CliConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_none() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_resolves_relative_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("citegraph.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "input = \"edges.csv\"").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.input, Some(dir.path().join("edges.csv")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/citegraph.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
