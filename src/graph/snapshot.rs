// src/graph/snapshot.rs
//! Versioned persisted form of a [`SocialGraph`].
//!
//! The snapshot is a node list plus one adjacency list per node, so a graph
//! built once from a large edge file can be reloaded without re-ingesting it.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Node, SocialGraph};
use crate::error::{RecommendError, Result};

/// Current on-disk schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable node list + adjacency lists. `adjacency[i]` belongs to `nodes[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    pub nodes: Vec<Node>,
    pub adjacency: Vec<Vec<Node>>,
}

impl SocialGraph {
    /// Captures the graph with nodes and neighbor lists in ascending order.
    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let nodes = self.nodes();
        let adjacency = nodes
            .iter()
            .map(|n| {
                self.adjacency
                    .get(n)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default()
            })
            .collect();

        GraphSnapshot {
            version: SNAPSHOT_VERSION,
            nodes,
            adjacency,
        }
    }

    /// Rebuilds a graph from a snapshot, checking every structural invariant.
    ///
    /// # Errors
    /// Returns `InvalidSnapshot` on a version mismatch, mismatched list lengths,
    /// duplicate nodes, self-loops, references to undeclared nodes, or an
    /// asymmetric adjacency.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RecommendError::InvalidSnapshot(format!(
                "unsupported version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        if snapshot.nodes.len() != snapshot.adjacency.len() {
            return Err(RecommendError::InvalidSnapshot(format!(
                "{} nodes but {} adjacency lists",
                snapshot.nodes.len(),
                snapshot.adjacency.len()
            )));
        }

        let mut adjacency: HashMap<Node, BTreeSet<Node>> =
            HashMap::with_capacity(snapshot.nodes.len());
        for (node, neighbors) in snapshot.nodes.into_iter().zip(snapshot.adjacency) {
            if neighbors.contains(&node) {
                return Err(RecommendError::InvalidSnapshot(format!(
                    "node {node} lists itself as a neighbor"
                )));
            }
            if adjacency.insert(node, neighbors.into_iter().collect()).is_some() {
                return Err(RecommendError::InvalidSnapshot(format!(
                    "node {node} appears more than once"
                )));
            }
        }

        check_symmetric(&adjacency)?;
        Ok(SocialGraph { adjacency })
    }
}

fn check_symmetric(adjacency: &HashMap<Node, BTreeSet<Node>>) -> Result<()> {
    for (node, neighbors) in adjacency {
        for other in neighbors {
            let Some(back) = adjacency.get(other) else {
                return Err(RecommendError::InvalidSnapshot(format!(
                    "node {node} references undeclared node {other}"
                )));
            };
            if !back.contains(node) {
                return Err(RecommendError::InvalidSnapshot(format!(
                    "edge {node} -> {other} has no reverse entry"
                )));
            }
        }
    }
    Ok(())
}

/// Writes `graph` to `path` as JSON.
///
/// # Errors
/// Returns `Io` if the file cannot be created or written.
pub fn save(graph: &SocialGraph, path: &Path) -> Result<()> {
    let io_err = |source| RecommendError::Io {
        source,
        path: path.to_path_buf(),
    };

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &graph.to_snapshot())
        .map_err(|e| io_err(std::io::Error::from(e)))?;
    writer.flush().map_err(io_err)?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph snapshot saved"
    );
    Ok(())
}

/// Reads and validates a JSON snapshot from `path`.
///
/// # Errors
/// Any failure (missing file, undecodable JSON, invalid structure) is
/// reported as `GraphNotAvailable`.
pub fn load(path: &Path) -> Result<SocialGraph> {
    let file = fs::File::open(path).map_err(|e| RecommendError::graph_unavailable(path, &e))?;
    let snapshot: GraphSnapshot = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| RecommendError::graph_unavailable(path, &e))?;
    let graph =
        SocialGraph::from_snapshot(snapshot).map_err(|e| RecommendError::graph_unavailable(path, &e))?;

    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        "graph snapshot loaded"
    );
    Ok(graph)
}
