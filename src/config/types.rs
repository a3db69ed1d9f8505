use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::recommend::{AggregationMethod, Strategy};

/// Default length of an individual recommendation list.
pub const DEFAULT_TOP_K: usize = 4;
/// Default length of each member's list before group aggregation.
pub const DEFAULT_MEMBER_TOP_K: usize = 4;
/// Default length of the final group list.
pub const DEFAULT_GROUP_TOP_K: usize = 5;
pub const DEFAULT_STRATEGY: Strategy = Strategy::Count;
pub const DEFAULT_GROUP_STRATEGY: Strategy = Strategy::Weighted;
pub const DEFAULT_METHOD: AggregationMethod = AggregationMethod::RankVote;

/// Settings read from `friendrec.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scoring strategy for individual queries.
    pub strategy: Strategy,
    /// Scoring strategy for each member of a group query.
    pub group_strategy: Strategy,
    pub method: AggregationMethod,
    pub top_k: usize,
    pub member_top_k: usize,
    pub group_top_k: usize,
    /// Where `build` writes its snapshot.
    pub snapshot_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY,
            group_strategy: DEFAULT_GROUP_STRATEGY,
            method: DEFAULT_METHOD,
            top_k: DEFAULT_TOP_K,
            member_top_k: DEFAULT_MEMBER_TOP_K,
            group_top_k: DEFAULT_GROUP_TOP_K,
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("graph.json")
}
