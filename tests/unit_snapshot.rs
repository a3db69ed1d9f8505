// tests/unit_snapshot.rs
//! Tests for graph snapshots and their on-disk form.

use friendrec_core::graph::snapshot::{self, SNAPSHOT_VERSION};
use friendrec_core::graph::GraphSnapshot;
use friendrec_core::{ingest, RecommendError, SocialGraph};
use std::fs;

fn sample() -> SocialGraph {
    SocialGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])
}

#[test]
fn test_snapshot_is_sorted() {
    let snap = SocialGraph::from_edges([(5, 4), (3, 1), (4, 3)]).to_snapshot();
    assert_eq!(snap.version, SNAPSHOT_VERSION);
    assert_eq!(snap.nodes, vec![1, 3, 4, 5]);
    assert_eq!(snap.adjacency, vec![vec![3], vec![1, 4], vec![3, 5], vec![4]]);
}

#[test]
fn test_snapshot_round_trip() {
    let g = sample();
    let back = SocialGraph::from_snapshot(g.to_snapshot()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_snapshot_accepts_any_node_order() {
    let snap = GraphSnapshot {
        version: SNAPSHOT_VERSION,
        nodes: vec![2, 1],
        adjacency: vec![vec![1], vec![2]],
    };
    let g = SocialGraph::from_snapshot(snap).unwrap();
    assert_eq!(g, SocialGraph::from_edges([(1, 2)]));
}

#[test]
fn test_snapshot_rejects_bad_version() {
    let mut snap = sample().to_snapshot();
    snap.version = SNAPSHOT_VERSION + 1;
    assert!(matches!(
        SocialGraph::from_snapshot(snap),
        Err(RecommendError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_snapshot_rejects_length_mismatch() {
    let mut snap = sample().to_snapshot();
    snap.adjacency.pop();
    assert!(matches!(
        SocialGraph::from_snapshot(snap),
        Err(RecommendError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_snapshot_rejects_asymmetric_edges() {
    let snap = GraphSnapshot {
        version: SNAPSHOT_VERSION,
        nodes: vec![1, 2],
        adjacency: vec![vec![2], vec![]],
    };
    assert!(matches!(
        SocialGraph::from_snapshot(snap),
        Err(RecommendError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_snapshot_rejects_undeclared_neighbor() {
    let snap = GraphSnapshot {
        version: SNAPSHOT_VERSION,
        nodes: vec![1],
        adjacency: vec![vec![2]],
    };
    assert!(matches!(
        SocialGraph::from_snapshot(snap),
        Err(RecommendError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_snapshot_rejects_duplicates_and_self_loops() {
    let dup = GraphSnapshot {
        version: SNAPSHOT_VERSION,
        nodes: vec![1, 1],
        adjacency: vec![vec![], vec![]],
    };
    assert!(SocialGraph::from_snapshot(dup).is_err());

    let looped = GraphSnapshot {
        version: SNAPSHOT_VERSION,
        nodes: vec![1],
        adjacency: vec![vec![1]],
    };
    assert!(SocialGraph::from_snapshot(looped).is_err());
}

#[test]
fn test_save_and_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("graph.json");
    let g = sample();
    snapshot::save(&g, &path).unwrap();

    assert_eq!(snapshot::load(&path).unwrap(), g);
    assert_eq!(ingest::load_graph(&path).unwrap(), g);
}

#[test]
fn test_load_missing_file_is_graph_not_available() {
    let d = tempfile::tempdir().unwrap();
    let err = snapshot::load(&d.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RecommendError::GraphNotAvailable { .. }));
}

#[test]
fn test_load_corrupt_file_is_graph_not_available() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("graph.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        snapshot::load(&path),
        Err(RecommendError::GraphNotAvailable { .. })
    ));

    fs::write(
        &path,
        r#"{"version":1,"nodes":[1,2],"adjacency":[[2],[]]}"#,
    )
    .unwrap();
    assert!(matches!(
        snapshot::load(&path),
        Err(RecommendError::GraphNotAvailable { .. })
    ));
}
