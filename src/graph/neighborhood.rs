// src/graph/neighborhood.rs
//! First- and second-degree neighbor sets around a focal user.

use std::collections::BTreeSet;

use super::{Node, SocialGraph};
use crate::error::Result;

/// Direct friends of `user`.
///
/// # Errors
/// Returns `UnknownNode` if `user` is not in the graph.
pub fn first_degree(graph: &SocialGraph, user: Node) -> Result<&BTreeSet<Node>> {
    graph.neighbors(user)
}

/// Friends of friends of `user`, excluding `user` and all direct friends.
///
/// # Errors
/// Returns `UnknownNode` if `user` is not in the graph.
pub fn second_degree_candidates(graph: &SocialGraph, user: Node) -> Result<BTreeSet<Node>> {
    let friends = first_degree(graph, user)?;
    let mut candidates = BTreeSet::new();

    for &friend in friends {
        for &second in graph.neighbors(friend)? {
            if second != user && !friends.contains(&second) {
                candidates.insert(second);
            }
        }
    }

    Ok(candidates)
}
