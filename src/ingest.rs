// src/ingest.rs
//! Edge-list parsing and graph loading.
//!
//! Each line holds `u1 u2 [timestamp]`, separated by tabs or spaces. Only the
//! two ids matter; anything after them is ignored.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{RecommendError, Result};
use crate::graph::{snapshot, Node, SocialGraph};

/// File extension treated as a persisted snapshot by [`load_graph`].
pub const SNAPSHOT_EXTENSION: &str = "json";

/// Parses an edge list from any buffered reader.
///
/// Blank lines and `#` comments are skipped.
///
/// # Errors
/// Returns `Parse` with the 1-based line number for a missing or non-integer id,
/// or `Io` if reading fails.
pub fn parse_edges<R: BufRead>(reader: R) -> Result<Vec<(Node, Node)>> {
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        edges.push(parse_line(trimmed, index + 1)?);
    }

    Ok(edges)
}

fn parse_line(line: &str, line_no: usize) -> Result<(Node, Node)> {
    let mut fields = line.split_whitespace();
    let u = parse_id(fields.next(), line_no)?;
    let v = parse_id(fields.next(), line_no)?;
    Ok((u, v))
}

fn parse_id(field: Option<&str>, line: usize) -> Result<Node> {
    let Some(raw) = field else {
        return Err(RecommendError::Parse {
            line,
            reason: "expected two user ids".to_string(),
        });
    };
    raw.parse().map_err(|_| RecommendError::Parse {
        line,
        reason: format!("invalid user id '{raw}'"),
    })
}

/// Reads and parses an edge-list file.
///
/// # Errors
/// Returns `Io` if the file cannot be opened, or any [`parse_edges`] error.
pub fn read_edge_file(path: &Path) -> Result<Vec<(Node, Node)>> {
    let file = fs::File::open(path).map_err(|source| RecommendError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let edges = parse_edges(BufReader::new(file))?;
    debug!(path = %path.display(), edges = edges.len(), "edge list parsed");
    Ok(edges)
}

/// Returns true if `path` names a persisted snapshot rather than a raw edge list.
#[must_use]
pub fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SNAPSHOT_EXTENSION))
}

/// Loads a snapshot, or ingests a raw edge list, depending on the extension.
///
/// # Errors
/// Snapshot failures surface as `GraphNotAvailable`; edge-list failures as
/// `Io` or `Parse`.
pub fn load_graph(path: &Path) -> Result<SocialGraph> {
    if is_snapshot(path) {
        return snapshot::load(path);
    }

    info!(path = %path.display(), "building graph from edge list");
    let graph = SocialGraph::from_edges(read_edge_file(path)?);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}
