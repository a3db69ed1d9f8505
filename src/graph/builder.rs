// src/graph/builder.rs
//! Graph construction from an edge stream.

use std::collections::{BTreeSet, HashMap};

use super::{Node, SocialGraph};

/// Accumulates undirected edges and freezes them into a [`SocialGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: HashMap<Node, BTreeSet<Node>>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `u -- v`. Repeated pairs (in either direction) are idempotent.
    ///
    /// A self-pair registers the node but adds no edge.
    pub fn add_edge(&mut self, u: Node, v: Node) {
        if u == v {
            self.adjacency.entry(u).or_default();
            return;
        }
        self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
    }

    pub fn extend<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    #[must_use]
    pub fn build(self) -> SocialGraph {
        SocialGraph {
            adjacency: self.adjacency,
        }
    }
}
