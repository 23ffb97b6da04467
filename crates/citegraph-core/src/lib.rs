//! Citegraph Core — shared identifier and error types.
//!
//! This crate provides the foundational types used across all Citegraph
//! crates. It has no internal Citegraph dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`ids`]: The article identifier newtype

pub mod error;
pub mod ids;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use ids::ArticleId;
