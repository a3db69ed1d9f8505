// src/recommend/individual.rs
//! Per-user friend-of-a-friend scoring.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::{ranking, RecommendationList, Score, ScoredSuggestion, Strategy};
use crate::error::Result;
use crate::graph::{neighborhood, Node, SocialGraph};

/// Scores every second-degree candidate of `user` and returns them ranked.
///
/// An empty list means `user` has no friends of friends; it is not an error.
///
/// # Errors
/// Returns `UnknownNode` if `user` is not in the graph.
pub fn recommend(graph: &SocialGraph, user: Node, strategy: Strategy) -> Result<RecommendationList> {
    let candidates = neighborhood::second_degree_candidates(graph, user)?;

    let mut list = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let score = score(graph, user, candidate, strategy)?;
        list.push(ScoredSuggestion::from_exact(candidate, score));
    }

    ranking::rank(&mut list);
    Ok(list)
}

fn score(graph: &SocialGraph, user: Node, candidate: Node, strategy: Strategy) -> Result<Score> {
    let common = graph.common_neighbors(user, candidate)?;

    match strategy {
        Strategy::Count => Ok(Score::from_integer(BigInt::from(common.len()))),
        Strategy::Weighted => {
            // Every common friend is adjacent to `user`, so its degree is at least 1.
            let mut total = Score::zero();
            for mutual in common {
                total += Score::new(BigInt::one(), BigInt::from(graph.degree(mutual)?));
            }
            Ok(total)
        }
    }
}
