// src/recommend/group.rs
//! Merging per-member recommendation lists into one group list.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;

use super::{
    ranking, AggregationMethod, GroupRecommendationList, RecommendationList, Score,
    ScoredSuggestion,
};
use crate::graph::Node;

/// Combines one (already truncated) list per member using `method`, then ranks.
#[must_use]
pub fn aggregate(lists: &[RecommendationList], method: AggregationMethod) -> GroupRecommendationList {
    let mut combined = match method {
        AggregationMethod::RankVote => rank_vote(lists),
        AggregationMethod::Average => average(lists),
    };
    ranking::rank(&mut combined);
    combined
}

/// Position `i` in a list of `n` earns `n - i`; weights are summed per suggestion.
fn rank_vote(lists: &[RecommendationList]) -> Vec<ScoredSuggestion> {
    let mut points: HashMap<Node, usize> = HashMap::new();

    for list in lists {
        let n = list.len();
        for (index, entry) in list.iter().enumerate() {
            *points.entry(entry.suggestion).or_default() += n - index;
        }
    }

    points
        .into_iter()
        .map(|(suggestion, weight)| {
            ScoredSuggestion::from_exact(suggestion, Score::from_integer(BigInt::from(weight)))
        })
        .collect()
}

/// Mean score over the lists containing the suggestion (not over the group size).
///
/// Sums are taken over the exact member scores, so the member order does not
/// affect the result.
fn average(lists: &[RecommendationList]) -> Vec<ScoredSuggestion> {
    let mut sums: HashMap<Node, (Score, usize)> = HashMap::new();

    for entry in lists.iter().flatten() {
        let slot = sums
            .entry(entry.suggestion)
            .or_insert_with(|| (Score::zero(), 0));
        slot.0 += entry.exact_score();
        slot.1 += 1;
    }

    sums.into_iter()
        .map(|(suggestion, (total, appearances))| {
            let mean = total / Score::from_integer(BigInt::from(appearances));
            ScoredSuggestion::from_exact(suggestion, mean)
        })
        .collect()
}
