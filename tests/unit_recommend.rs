// tests/unit_recommend.rs
//! Tests for individual recommendations and the query entry point.

use friendrec_core::config::DEFAULT_TOP_K;
use friendrec_core::recommend::{self, ranking};
use friendrec_core::{RecommendError, Recommender, ScoredSuggestion, SocialGraph, Strategy};

fn sample() -> SocialGraph {
    SocialGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)])
}

/// 1's friends are 2 (degree 2) and 3 (degree 4).
fn weighted_sample() -> SocialGraph {
    SocialGraph::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (3, 6), (3, 7)])
}

fn ids(list: &[ScoredSuggestion]) -> Vec<u64> {
    list.iter().map(|s| s.suggestion).collect()
}

#[test]
fn test_end_to_end_count() {
    let list = recommend::recommend(&sample(), 1, Strategy::Count).unwrap();
    assert_eq!(list, vec![ScoredSuggestion::new(4, 2.0)]);
}

#[test]
fn test_excludes_self_and_direct_friends() {
    let g = sample();
    for user in g.nodes() {
        let friends = g.neighbors(user).unwrap().clone();
        for s in recommend::recommend(&g, user, Strategy::Count).unwrap() {
            assert_ne!(s.suggestion, user);
            assert!(!friends.contains(&s.suggestion));
        }
    }
}

#[test]
fn test_count_ranking_and_tie_break() {
    let list = recommend::recommend(&weighted_sample(), 1, Strategy::Count).unwrap();
    assert_eq!(ids(&list), vec![4, 6, 7]);
    assert_eq!(list[0].score, 2.0);
    assert_eq!(list[1].score, 1.0);
    assert_eq!(list[2].score, 1.0);
}

#[test]
fn test_weighted_scores() {
    let list = recommend::recommend(&weighted_sample(), 1, Strategy::Weighted).unwrap();
    assert_eq!(
        list,
        vec![
            ScoredSuggestion::new(4, 0.75),
            ScoredSuggestion::new(6, 0.25),
            ScoredSuggestion::new(7, 0.25),
        ]
    );
}

#[test]
fn test_weighted_can_reorder_count() {
    // 10 shares two popular friends with 1; 20 shares one friend of degree 2.
    let mut edges = vec![(1, 2), (1, 3), (1, 4), (2, 10), (3, 10), (4, 20)];
    for extra in 100..110 {
        edges.push((2, extra));
        edges.push((3, extra));
    }
    let g = SocialGraph::from_edges(edges);

    let by_count = recommend::recommend(&g, 1, Strategy::Count).unwrap();
    assert_eq!(by_count[0].suggestion, 10);

    let by_weight = recommend::recommend(&g, 1, Strategy::Weighted).unwrap();
    assert_eq!(by_weight[0].suggestion, 20);
    assert_eq!(by_weight[0].score, 0.5);
}

#[test]
fn test_weighted_tie_independent_of_summation_order() {
    // 50 is reached through 2, 3 (degree 2) and 4 (degree 6); 100 through
    // 5 (degree 6) and 6, 7 (degree 2). Both score 1/2 + 1/2 + 1/6.
    let mut edges = vec![
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 5),
        (1, 6),
        (1, 7),
        (2, 50),
        (3, 50),
        (4, 50),
        (5, 100),
        (6, 100),
        (7, 100),
    ];
    for extra in 200..204 {
        edges.push((4, extra));
        edges.push((5, extra + 10));
    }
    let g = SocialGraph::from_edges(edges);
    assert_eq!(g.degree(4).unwrap(), 6);
    assert_eq!(g.degree(5).unwrap(), 6);

    let list = recommend::recommend(&g, 1, Strategy::Weighted).unwrap();
    assert_eq!(ids(&list[..2]), vec![50, 100]);
    assert_eq!(list[0].score, list[1].score);
    assert_eq!(list[0].exact_score(), list[1].exact_score());

    let r = Recommender::new(g);
    let top = r.recommend_individual(1, Strategy::Weighted, 1).unwrap();
    assert_eq!(ids(&top), vec![50]);
}

#[test]
fn test_no_candidates_is_empty_not_error() {
    let g = SocialGraph::from_edges([(1, 2)]);
    assert!(recommend::recommend(&g, 1, Strategy::Count)
        .unwrap()
        .is_empty());
}

#[test]
fn test_unknown_user() {
    let r = Recommender::new(sample());
    let err = r
        .recommend_individual(99, Strategy::Count, DEFAULT_TOP_K)
        .unwrap_err();
    assert!(matches!(err, RecommendError::UnknownNode(99)));
}

#[test]
fn test_top_k_truncates_after_sort() {
    let r = Recommender::new(weighted_sample());
    let list = r.recommend_individual(1, Strategy::Count, 2).unwrap();
    assert_eq!(ids(&list), vec![4, 6]);
}

#[test]
fn test_top_k_zero_rejected() {
    let r = Recommender::new(sample());
    assert!(matches!(
        r.recommend_individual(1, Strategy::Count, 0),
        Err(RecommendError::InvalidTopK)
    ));
}

#[test]
fn test_strategy_parsing() {
    assert_eq!("count".parse::<Strategy>().unwrap(), Strategy::Count);
    assert_eq!("Weighted".parse::<Strategy>().unwrap(), Strategy::Weighted);
    assert!(matches!(
        "adamic".parse::<Strategy>(),
        Err(RecommendError::UnsupportedStrategy(s)) if s == "adamic"
    ));
}

#[test]
fn test_ranking_orders_by_score_then_id() {
    let mut ranked = vec![
        ScoredSuggestion::new(9, 1.0),
        ScoredSuggestion::new(3, 2.0),
        ScoredSuggestion::new(5, 1.0),
        ScoredSuggestion::new(1, 1.0),
    ];
    ranking::rank(&mut ranked);
    assert_eq!(ids(&ranked), vec![3, 1, 5, 9]);
}

#[test]
fn test_recommender_is_shareable_across_threads() {
    let r = Recommender::new(weighted_sample());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = r.clone();
            std::thread::spawn(move || r.recommend_individual(1, Strategy::Weighted, 4))
        })
        .collect();
    for h in handles {
        assert_eq!(ids(&h.join().unwrap().unwrap()), vec![4, 6, 7]);
    }
}
