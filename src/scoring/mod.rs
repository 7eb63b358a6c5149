//! Scoring engine.
//!
//! A pure function from (question model, answer state) to a [`ScoreResult`]:
//! raw directed sum, normalized score, likelihood percentage,
//! penalty-adjusted accuracy, confidence bucket, and the classified verdict.
//!
//! The engine is total over any well-formed input pair. Malformed values
//! (responses outside the scale, undeclared evidence indices) are rejected
//! earlier, at the answer-state mutation boundary, so no error handling is
//! needed here.
//!
//! # Algorithm
//!
//! Each answered item contributes `(value - 3) * dir` to the raw score,
//! mapping the 1..=5 scale to a centered -2..=+2. A strong answer (4 or 5)
//! backed by at least one checked evidence prompt earns a corroboration
//! bonus of `1 * dir`. A strong answer with declared but unchecked prompts
//! counts as an unconfirmed claim; a cannot-corroborate admission skips the
//! bonus path entirely and is penalized once (never also as unconfirmed).
//!
//! Normalization bounds run over the *full* item set, answered or not, so an
//! incomplete run biases toward an inconclusive verdict instead of a
//! false-confident one.

mod types;
mod verdict;

pub use types::{ConfidenceLabel, ScoreResult, Verdict};
pub use verdict::classify;

use crate::assessment::Assessment;
use crate::session::AnswerState;

/// Lowest ordinal value counted as a strong response.
pub const STRONG_MIN: u8 = 4;

/// Raw-score bonus (scaled by direction) for a corroborated strong answer.
const CORROBORATION_BONUS: i64 = 1;

/// Whether a response value is strong: the top two points of the scale.
#[must_use]
pub const fn is_strong(value: u8) -> bool {
    value >= STRONG_MIN
}

/// Tunable scoring constants.
///
/// Defaults, not requirements: the config layer can override the penalty
/// and threshold subset from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTuning {
    /// Accuracy penalty per cannot-corroborate admission.
    pub cannot_corroborate_penalty: u32,
    /// Accuracy penalty per unconfirmed strong claim.
    pub unconfirmed_strong_penalty: u32,
    /// Accuracy never drops below this floor.
    pub accuracy_floor: u8,
    /// Minimum accuracy for the high confidence bucket.
    pub high_accuracy: u8,
    /// Minimum separation for the high confidence bucket.
    pub high_separation: f64,
    /// Minimum accuracy for the medium confidence bucket.
    pub medium_accuracy: u8,
    /// Minimum separation for the medium confidence bucket.
    pub medium_separation: f64,
    /// Below this accuracy the verdict is forced inconclusive.
    pub min_accuracy_for_verdict: u8,
    /// Dead-band half-width around zero for the directional verdict.
    pub verdict_threshold: f64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            cannot_corroborate_penalty: 10,
            unconfirmed_strong_penalty: 3,
            accuracy_floor: 25,
            high_accuracy: 85,
            high_separation: 0.35,
            medium_accuracy: 70,
            medium_separation: 0.22,
            min_accuracy_for_verdict: 55,
            verdict_threshold: 0.18,
        }
    }
}

/// Score an answer state against its question model.
///
/// Total function: any combination of valid responses, evidence checks and
/// cannot-corroborate flags produces a result. Unanswered items contribute
/// nothing to the raw score but still widen the normalization bounds.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score(assessment: &Assessment, state: &AnswerState, tuning: &ScoringTuning) -> ScoreResult {
    let mut raw: i64 = 0;
    let mut cannot_corroborate_count: u32 = 0;
    let mut unconfirmed_strong_count: u32 = 0;
    let mut answered: u32 = 0;

    let mut max_core: i64 = 0;
    let mut max_bonus: i64 = 0;

    for item in assessment.items() {
        let dir = i64::from(item.dir);
        let abs_dir = dir.abs();

        // Bounds cover every item, answered or not
        max_core += 2 * abs_dir;
        if item.has_examples() {
            max_bonus += CORROBORATION_BONUS * abs_dir;
        }

        let Some(value) = state.response(&item.id) else {
            continue;
        };
        answered += 1;
        raw += (i64::from(value) - 3) * dir;

        if state.cannot_corroborate(&item.id) {
            // Penalized once; not also counted as an unconfirmed strong claim
            cannot_corroborate_count += 1;
            continue;
        }

        if is_strong(value) && item.has_examples() {
            if state.any_evidence_checked(&item.id) {
                raw += CORROBORATION_BONUS * dir;
            } else {
                unconfirmed_strong_count += 1;
            }
        }
    }

    let max_possible = (max_core + max_bonus).max(1);
    let normalized_score = (raw as f64 / max_possible as f64).clamp(-1.0, 1.0);

    let likelihood_percent = ((normalized_score + 1.0) * 50.0).round().clamp(0.0, 100.0) as u8;

    let penalty = i64::from(cannot_corroborate_count)
        * i64::from(tuning.cannot_corroborate_penalty)
        + i64::from(unconfirmed_strong_count) * i64::from(tuning.unconfirmed_strong_penalty);
    let accuracy_percent = (100 - penalty).clamp(i64::from(tuning.accuracy_floor), 100) as u8;

    let separation = normalized_score.abs();
    let confidence = if accuracy_percent >= tuning.high_accuracy && separation >= tuning.high_separation
    {
        ConfidenceLabel::High
    } else if accuracy_percent >= tuning.medium_accuracy && separation >= tuning.medium_separation {
        ConfidenceLabel::Medium
    } else {
        ConfidenceLabel::Low
    };

    let (verdict, verdict_confidence_percent) =
        classify(normalized_score, accuracy_percent, tuning);

    ScoreResult {
        raw_score: raw,
        normalized_score,
        likelihood_percent,
        accuracy_percent,
        confidence,
        verdict,
        verdict_confidence_percent,
        cannot_corroborate_count,
        unconfirmed_strong_count,
        answered,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::assessment::Item;
    use crate::test_utils::{plain_items, state_with_responses};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_is_strong_boundary() {
        assert!(!is_strong(3));
        assert!(is_strong(4));
        assert!(is_strong(5));
    }

    #[test]
    fn test_neutral_answer_contributes_nothing() {
        let a = plain_items(1);
        let s = state_with_responses(&a, &[("q0", 3)]);
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 0);
        assert_eq!(result.normalized_score, 0.0);
        assert_eq!(result.likelihood_percent, 50);
    }

    #[test]
    fn test_direction_flips_contribution() {
        let a = Assessment::new("t", "", vec![Item::new("r", "reverse").with_direction(-1)]);
        let s = state_with_responses(&a, &[("r", 5)]);
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, -2);
        assert!(result.normalized_score < 0.0);
    }

    #[test]
    fn test_direction_magnitude_scales_contribution() {
        let a = Assessment::new("t", "", vec![Item::new("w", "weighted").with_direction(2)]);
        let s = state_with_responses(&a, &[("w", 5)]);
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 4);
        // max_core = 2*|2| = 4, no examples
        assert_eq!(result.normalized_score, 1.0);
    }

    #[test]
    fn test_zero_direction_item_is_inert() {
        let a = Assessment::new("t", "", vec![Item::new("z", "inert").with_direction(0)]);
        let s = state_with_responses(&a, &[("z", 5)]);
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 0);
        // max_core is 0, denominator floors at 1
        assert_eq!(result.normalized_score, 0.0);
    }

    #[test]
    fn test_unanswered_items_widen_bounds() {
        let a = plain_items(4);
        let s = state_with_responses(&a, &[("q0", 5)]);
        let result = score(&a, &s, &ScoringTuning::default());
        // raw 2 out of max_core 8
        assert_eq!(result.raw_score, 2);
        assert_eq!(result.normalized_score, 0.25);
        assert_eq!(result.answered, 1);
    }

    #[test]
    fn test_empty_state_scores_neutral() {
        let a = plain_items(6);
        let s = AnswerState::new();
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 0);
        assert_eq!(result.likelihood_percent, 50);
        assert_eq!(result.accuracy_percent, 100);
        assert_eq!(result.verdict, Verdict::Inconclusive);
    }

    #[test]
    fn test_corroboration_bonus_applied() {
        let a = Assessment::new(
            "t",
            "",
            vec![Item::new("e", "prompted").with_examples(vec!["x".into(), "y".into()])],
        );
        let mut s = AnswerState::new();
        s.set_response(&a, "e", 5).unwrap();
        s.toggle_evidence(&a, "e", 0, true).unwrap();

        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 3); // 2 centered + 1 bonus
        assert_eq!(result.unconfirmed_strong_count, 0);
        // max_core 2 + max_bonus 1
        assert_eq!(result.normalized_score, 1.0);
    }

    #[test]
    fn test_unconfirmed_strong_counted_without_score_change() {
        let a = Assessment::new(
            "t",
            "",
            vec![Item::new("e", "prompted").with_examples(vec!["x".into()])],
        );
        let mut s = AnswerState::new();
        s.set_response(&a, "e", 5).unwrap();

        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 2);
        assert_eq!(result.unconfirmed_strong_count, 1);
        assert_eq!(result.accuracy_percent, 97);
    }

    #[test]
    fn test_cannot_corroborate_skips_bonus_path() {
        let a = Assessment::new(
            "t",
            "",
            vec![Item::new("e", "prompted").with_examples(vec!["x".into()])],
        );
        let mut s = AnswerState::new();
        s.set_response(&a, "e", 5).unwrap();
        s.set_cannot_corroborate(&a, "e", true).unwrap();

        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.raw_score, 2); // no bonus
        assert_eq!(result.cannot_corroborate_count, 1);
        assert_eq!(result.unconfirmed_strong_count, 0); // not double-penalized
        assert_eq!(result.accuracy_percent, 90);
    }

    #[test]
    fn test_strong_without_declared_prompts_is_not_unconfirmed() {
        let a = plain_items(1);
        let s = state_with_responses(&a, &[("q0", 5)]);
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.unconfirmed_strong_count, 0);
        assert_eq!(result.accuracy_percent, 100);
    }

    #[test]
    fn test_accuracy_floor() {
        let a = plain_items(12);
        let mut s = AnswerState::new();
        for i in 0..12 {
            let id = format!("q{i}");
            s.set_response(&a, &id, 5).unwrap();
            s.set_cannot_corroborate(&a, &id, true).unwrap();
        }
        let result = score(&a, &s, &ScoringTuning::default());
        // 100 - 12*10 would be -20; floored
        assert_eq!(result.accuracy_percent, 25);
    }

    // Two plain items with q0=5 and q1=3 give separation 0.5; flagging q1
    // cannot-corroborate with a custom penalty dials accuracy to 100 - p.
    #[test_case(0, ConfidenceLabel::High; "full accuracy")]
    #[test_case(15, ConfidenceLabel::High; "high boundary")]
    #[test_case(16, ConfidenceLabel::Medium; "accuracy just below high")]
    #[test_case(30, ConfidenceLabel::Medium; "medium boundary")]
    #[test_case(31, ConfidenceLabel::Low; "accuracy below medium")]
    fn test_confidence_buckets(penalty: u32, expected: ConfidenceLabel) {
        let a = plain_items(2);
        let mut s = state_with_responses(&a, &[("q0", 5), ("q1", 3)]);
        if penalty > 0 {
            s.set_cannot_corroborate(&a, "q1", true).unwrap();
        }

        let tuning = ScoringTuning {
            cannot_corroborate_penalty: penalty,
            ..ScoringTuning::default()
        };
        let result = score(&a, &s, &tuning);
        assert_eq!(result.normalized_score, 0.5);
        assert_eq!(result.confidence, expected);
    }

    #[test]
    fn test_small_separation_is_low_confidence() {
        let a = plain_items(5);
        let s = state_with_responses(&a, &[("q0", 4)]);
        let result = score(&a, &s, &ScoringTuning::default());
        // 1 out of max_core 10
        assert_eq!(result.normalized_score, 0.1);
        assert_eq!(result.accuracy_percent, 100);
        assert_eq!(result.confidence, ConfidenceLabel::Low);
    }

    #[test]
    fn test_all_max_answers_hit_high_confidence() {
        let a = plain_items(6);
        let mut s = AnswerState::new();
        for i in 0..6 {
            s.set_response(&a, &format!("q{i}"), 5).unwrap();
        }
        let result = score(&a, &s, &ScoringTuning::default());
        assert_eq!(result.confidence, ConfidenceLabel::High);
        assert_eq!(result.verdict, Verdict::Likely);
    }

    #[test]
    fn test_custom_penalties_respected() {
        let a = Assessment::new(
            "t",
            "",
            vec![Item::new("e", "prompted").with_examples(vec!["x".into()])],
        );
        let mut s = AnswerState::new();
        s.set_response(&a, "e", 5).unwrap();
        s.set_cannot_corroborate(&a, "e", true).unwrap();

        let tuning = ScoringTuning {
            cannot_corroborate_penalty: 40,
            accuracy_floor: 50,
            ..ScoringTuning::default()
        };
        let result = score(&a, &s, &tuning);
        assert_eq!(result.accuracy_percent, 60);
    }
}
