//! Score prediction from head-to-head history.
//!
//! The predicted full-time score is the integer median of past home scores
//! paired with the integer median of past away scores. Deliberately crude;
//! the UI labels it as an estimate.

use crate::domain::models::Prediction;
use crate::upstream::types::RawMatch;

/// Integer median. Empty input yields 0. For an even count the mean of the
/// two middle values is rounded half-up (2.5 → 3).
pub fn compute_median(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        // Half-up rounding via integer arithmetic; scores are non-negative.
        (sorted[mid - 1] + sorted[mid] + 1) / 2
    }
}

/// Predicts a full-time score from past meetings. Only matches with both
/// full-time scores recorded contribute; an unfinished match is excluded
/// from both sequences rather than counted as 0-0.
pub fn predict(head_to_head: &[RawMatch]) -> Prediction {
    let scored: Vec<(i64, i64)> = head_to_head
        .iter()
        .filter_map(|m| {
            let full_time = m.score.as_ref()?.full_time.as_ref()?;
            Some((full_time.home?, full_time.away?))
        })
        .collect();

    let home_scores: Vec<i64> = scored.iter().map(|(home, _)| *home).collect();
    let away_scores: Vec<i64> = scored.iter().map(|(_, away)| *away).collect();

    Prediction::new(compute_median(&home_scores), compute_median(&away_scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_empty_is_zero() {
        assert_eq!(compute_median(&[]), 0);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(compute_median(&[3]), 3);
    }

    #[test]
    fn test_median_odd_length_is_middle() {
        assert_eq!(compute_median(&[5, 1, 2]), 2);
    }

    #[test]
    fn test_median_even_length_rounds_half_up() {
        // mean of 2 and 3 is 2.5 → 3
        assert_eq!(compute_median(&[1, 2, 3, 4]), 3);
        // mean of 1 and 2 is 1.5 → 2
        assert_eq!(compute_median(&[1, 2]), 2);
        // exact mean stays exact
        assert_eq!(compute_median(&[2, 4]), 3);
    }

    #[test]
    fn test_median_input_order_is_irrelevant() {
        assert_eq!(compute_median(&[4, 1, 3, 2]), 3);
    }

    fn h2h_match(id: i64, home: Option<i64>, away: Option<i64>) -> RawMatch {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "utcDate": "2025-11-02T15:00:00Z",
            "score": {"fullTime": {"home": home, "away": away}}
        }))
        .expect("valid raw match")
    }

    #[test]
    fn test_predict_excludes_unscored_matches() {
        let history = vec![
            h2h_match(1, Some(1), Some(2)),
            h2h_match(2, Some(3), Some(0)),
            h2h_match(3, None, Some(1)),
        ];
        let prediction = predict(&history);
        // medians over [1,3] and [2,0]
        assert_eq!(prediction, Prediction::new(2, 1));
    }

    #[test]
    fn test_predict_no_history_is_nil_nil() {
        assert_eq!(predict(&[]), Prediction::new(0, 0));
    }

    #[test]
    fn test_predict_ignores_matches_without_score_block() {
        let unplayed: RawMatch = serde_json::from_value(serde_json::json!({
            "id": 9,
            "utcDate": "2026-09-01T15:00:00Z"
        }))
        .unwrap();
        let history = vec![unplayed, h2h_match(1, Some(2), Some(2))];
        assert_eq!(predict(&history), Prediction::new(2, 2));
    }
}
