// src/recommend/ranking.rs
//! Deterministic ordering shared by individual and group recommendations.

use std::cmp::Ordering;

use super::ScoredSuggestion;

/// Exact score descending, then suggestion id ascending.
#[must_use]
pub fn compare(a: &ScoredSuggestion, b: &ScoredSuggestion) -> Ordering {
    b.exact_score()
        .cmp(a.exact_score())
        .then_with(|| a.suggestion.cmp(&b.suggestion))
}

/// Sorts `list` in place into ranking order.
pub fn rank(list: &mut [ScoredSuggestion]) {
    list.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_scores_break_on_id() {
        let a = ScoredSuggestion::new(3, 1.5);
        let b = ScoredSuggestion::new(8, 1.5);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_rank_sorts_by_score_then_id() {
        let mut list = vec![
            ScoredSuggestion::new(4, 0.1),
            ScoredSuggestion::new(2, 0.9),
            ScoredSuggestion::new(3, 0.1),
        ];
        rank(&mut list);
        assert_eq!(list.iter().map(|s| s.suggestion).collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
