//! Friend-of-a-friend recommendations over a static social graph.
//!
//! Build a [`graph::SocialGraph`] once, wrap it in a [`recommend::Recommender`],
//! and run as many individual or group queries against it as needed.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod recommend;
pub mod reporting;

pub use error::{RecommendError, Result};
pub use graph::{Node, SocialGraph};
pub use recommend::{
    AggregationMethod, GroupRecommendationList, RecommendationList, Recommender, Score,
    ScoredSuggestion, Strategy,
};
