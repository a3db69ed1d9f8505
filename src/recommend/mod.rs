// src/recommend/mod.rs
//! Recommendation engine: scoring, ranking and group aggregation.

pub mod engine;
pub mod group;
pub mod individual;
pub mod ranking;

pub use engine::{GroupQuery, Recommender};
pub use group::aggregate;
pub use individual::recommend;

use std::fmt;
use std::str::FromStr;

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::graph::Node;

/// Exact score value; scores are sums and means of unit fractions.
pub type Score = BigRational;

/// A candidate and its score under some strategy or aggregation method.
///
/// Ranking compares the exact score, so suggestions whose scores are equal
/// as rationals tie on the score and fall back to the id regardless of the
/// order their terms were added in. `score` is the nearest `f64`, kept for
/// reporting and serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSuggestion {
    pub suggestion: Node,
    pub score: f64,
    #[serde(skip)]
    exact: Score,
}

impl ScoredSuggestion {
    /// Wraps an `f64` score; the exact value is the float's own binary value.
    #[must_use]
    pub fn new(suggestion: Node, score: f64) -> Self {
        let exact = Score::from_float(score).unwrap_or_else(Score::zero);
        Self {
            suggestion,
            score,
            exact,
        }
    }

    #[must_use]
    pub fn from_exact(suggestion: Node, exact: Score) -> Self {
        Self {
            suggestion,
            score: exact.to_f64().unwrap_or(f64::NAN),
            exact,
        }
    }

    #[must_use]
    pub fn exact_score(&self) -> &Score {
        &self.exact
    }
}

impl PartialEq for ScoredSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.suggestion == other.suggestion && self.score == other.score
    }
}

/// Ranked suggestions for one user.
pub type RecommendationList = Vec<ScoredSuggestion>;

/// Ranked suggestions for a group; score units depend on the aggregation method.
pub type GroupRecommendationList = Vec<ScoredSuggestion>;

/// How a second-degree candidate is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Strategy {
    /// Number of common friends.
    Count,
    /// Sum of `1 / degree(m)` over common friends `m`.
    Weighted,
}

impl Strategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Weighted => "weighted",
        }
    }
}

impl FromStr for Strategy {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "weighted" => Ok(Self::Weighted),
            _ => Err(RecommendError::UnsupportedStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = RecommendError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How per-member lists are merged into one group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum AggregationMethod {
    /// Borda count: position `i` of `n` earns `n - i`.
    RankVote,
    /// Mean raw score over the lists a suggestion appears in.
    Average,
}

impl AggregationMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RankVote => "rank-vote",
            Self::Average => "average",
        }
    }
}

impl FromStr for AggregationMethod {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank-vote" | "borda" => Ok(Self::RankVote),
            "average" => Ok(Self::Average),
            _ => Err(RecommendError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for AggregationMethod {
    type Error = RecommendError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
