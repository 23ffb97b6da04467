//! Error types for Citegraph.

use crate::ArticleId;
use std::path::{Path, PathBuf};

/// Result type alias for Citegraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying or loading a citation graph.
///
/// Graph mutation and degree queries never fail; only analytics that
/// require a known article and the I/O edges of the system produce errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An article id was supplied that the graph does not know about.
    #[error("Invalid argument: article {id} {message}")]
    InvalidArgument {
        /// The offending article id
        id: ArticleId,
        /// What was expected of it
        message: String,
    },

    /// I/O error while reading or writing a file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV deserialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates an invalid-argument error for an unknown article.
    pub fn unknown_article(id: ArticleId) -> Self {
        Error::InvalidArgument {
            id,
            message: "does not exist in the citation graph".to_string(),
        }
    }

    /// Creates an invalid-argument error with a custom message.
    pub fn invalid_argument<S: Into<String>>(id: ArticleId, message: S) -> Self {
        Error::InvalidArgument {
            id,
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns whether this error was caused by an unknown article id.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
