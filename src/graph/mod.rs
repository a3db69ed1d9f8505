// src/graph/mod.rs
//! The immutable undirected social graph and its query interface.

pub mod builder;
pub mod neighborhood;
pub mod snapshot;

pub use builder::GraphBuilder;
pub use snapshot::GraphSnapshot;

use std::collections::{BTreeSet, HashMap};

use crate::error::{RecommendError, Result};

/// Opaque participant identifier.
pub type Node = u64;

/// Undirected adjacency over integer-identified nodes.
///
/// Neighbor sets are ordered so that every traversal (and therefore every
/// floating-point sum built from one) is independent of insertion order.
/// There is no mutation API: a graph is produced by [`GraphBuilder`] or
/// [`SocialGraph::from_snapshot`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialGraph {
    pub(crate) adjacency: HashMap<Node, BTreeSet<Node>>,
}

impl SocialGraph {
    /// Builds a graph from a stream of undirected `(u, v)` pairs.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend(edges);
        builder.build()
    }

    /// Returns true if the node appeared in any edge.
    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns the direct neighbors of `node`.
    ///
    /// # Errors
    /// Returns `UnknownNode` if the node never appeared in the edge stream.
    pub fn neighbors(&self, node: Node) -> Result<&BTreeSet<Node>> {
        self.adjacency
            .get(&node)
            .ok_or(RecommendError::UnknownNode(node))
    }

    /// Number of direct neighbors of `node`.
    ///
    /// # Errors
    /// Returns `UnknownNode` if the node is absent.
    pub fn degree(&self, node: Node) -> Result<usize> {
        self.neighbors(node).map(BTreeSet::len)
    }

    /// Nodes adjacent to both `a` and `b`, in ascending order.
    ///
    /// # Errors
    /// Returns `UnknownNode` if either node is absent.
    pub fn common_neighbors(&self, a: Node, b: Node) -> Result<BTreeSet<Node>> {
        let left = self.neighbors(a)?;
        let right = self.neighbors(b)?;
        Ok(left.intersection(right).copied().collect())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let endpoints: usize = self.adjacency.values().map(BTreeSet::len).sum();
        endpoints / 2
    }

    /// All nodes in ascending order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}
