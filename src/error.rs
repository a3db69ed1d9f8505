// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::Node;

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Unknown user {0}: not present in the graph")]
    UnknownNode(Node),

    #[error("Unsupported strategy '{0}' (supported: count, weighted)")]
    UnsupportedStrategy(String),

    #[error("Unsupported method '{0}' (supported: rank-vote, average)")]
    UnsupportedMethod(String),

    #[error("top-k must be a positive integer")]
    InvalidTopK,

    #[error("Graph not available at {path}: {reason}")]
    GraphNotAvailable { path: PathBuf, reason: String },

    #[error("Invalid graph snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid configuration in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, RecommendError>;

// Allow `?` on std::io::Error by converting to RecommendError::Io with unknown path.
impl From<std::io::Error> for RecommendError {
    fn from(source: std::io::Error) -> Self {
        RecommendError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl RecommendError {
    /// Wraps any error raised while fetching a persisted graph into `GraphNotAvailable`.
    #[must_use]
    pub fn graph_unavailable(path: impl Into<PathBuf>, cause: &dyn std::fmt::Display) -> Self {
        RecommendError::GraphNotAvailable {
            path: path.into(),
            reason: cause.to_string(),
        }
    }
}
