// src/recommend/engine.rs
//! Query entry points over a shared, read-only graph.

use std::sync::Arc;

use rayon::prelude::*;

use super::{
    group, individual, AggregationMethod, GroupRecommendationList, RecommendationList, Strategy,
};
use crate::config::{Config, DEFAULT_GROUP_STRATEGY, DEFAULT_MEMBER_TOP_K};
use crate::error::{RecommendError, Result};
use crate::graph::{Node, SocialGraph};

/// Options for a group query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupQuery {
    pub method: AggregationMethod,
    /// Scoring strategy for each member's individual list.
    pub strategy: Strategy,
    /// Length each member's list is truncated to before aggregation.
    pub member_top_k: usize,
    /// Length of the final group list.
    pub top_k: usize,
}

/// Answers individual and group queries against one graph.
///
/// The graph is shared behind an `Arc` and never mutated, so a `Recommender`
/// can be cloned freely across threads.
#[derive(Debug, Clone)]
pub struct Recommender {
    graph: Arc<SocialGraph>,
    group_strategy: Strategy,
    member_top_k: usize,
}

impl Recommender {
    #[must_use]
    pub fn new(graph: impl Into<Arc<SocialGraph>>) -> Self {
        Self {
            graph: graph.into(),
            group_strategy: DEFAULT_GROUP_STRATEGY,
            member_top_k: DEFAULT_MEMBER_TOP_K,
        }
    }

    /// Takes group defaults from `config`.
    #[must_use]
    pub fn from_config(graph: impl Into<Arc<SocialGraph>>, config: &Config) -> Self {
        Self::new(graph)
            .with_group_strategy(config.group_strategy)
            .with_member_top_k(config.member_top_k)
    }

    #[must_use]
    pub fn with_group_strategy(mut self, strategy: Strategy) -> Self {
        self.group_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_member_top_k(mut self, member_top_k: usize) -> Self {
        self.member_top_k = member_top_k;
        self
    }

    /// Top `top_k` suggestions for `user`.
    ///
    /// # Errors
    /// Returns `InvalidTopK` for `top_k == 0` and `UnknownNode` for an absent user.
    pub fn recommend_individual(
        &self,
        user: Node,
        strategy: Strategy,
        top_k: usize,
    ) -> Result<RecommendationList> {
        ensure_top_k(top_k)?;
        let mut list = individual::recommend(&self.graph, user, strategy)?;
        list.truncate(top_k);
        Ok(list)
    }

    /// Top `top_k` suggestions for the group, using the configured per-member
    /// strategy and list length.
    ///
    /// # Errors
    /// See [`Recommender::recommend_group_with`].
    pub fn recommend_group(
        &self,
        users: &[Node],
        method: AggregationMethod,
        top_k: usize,
    ) -> Result<GroupRecommendationList> {
        let query = GroupQuery {
            method,
            strategy: self.group_strategy,
            member_top_k: self.member_top_k,
            top_k,
        };
        self.recommend_group_with(users, &query)
    }

    /// Runs every member's individual query in parallel, then aggregates.
    ///
    /// # Errors
    /// Returns `InvalidTopK` if either list length is zero, or the first
    /// member error (e.g. `UnknownNode`); no partial result is produced.
    pub fn recommend_group_with(
        &self,
        users: &[Node],
        query: &GroupQuery,
    ) -> Result<GroupRecommendationList> {
        ensure_top_k(query.member_top_k)?;
        ensure_top_k(query.top_k)?;

        let member_lists = users
            .par_iter()
            .map(|&user| self.recommend_individual(user, query.strategy, query.member_top_k))
            .collect::<Result<Vec<_>>>()?;

        let mut combined = group::aggregate(&member_lists, query.method);
        combined.truncate(query.top_k);
        Ok(combined)
    }
}

fn ensure_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(RecommendError::InvalidTopK);
    }
    Ok(())
}
