//! Verdict classifier.
//!
//! Maps a normalized score and an accuracy percentage to a categorical
//! verdict plus a verdict-confidence percentage. Stateless: it is recomputed
//! fresh on every answer change, with no hysteresis between evaluations.

use super::types::Verdict;
use super::ScoringTuning;

/// Weight of accuracy in the verdict-confidence blend.
const ACCURACY_WEIGHT: f64 = 0.6;

/// Weight of score separation in the verdict-confidence blend.
const SEPARATION_WEIGHT: f64 = 0.4;

/// Classify a normalized score given the accuracy of the underlying data.
///
/// Below the accuracy gate the verdict is inconclusive regardless of score:
/// low-quality data must never yield a confident directional claim. Around
/// zero there is a dead band so marginal scores don't flip-flop on tiny
/// input changes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn classify(normalized_score: f64, accuracy_percent: u8, tuning: &ScoringTuning) -> (Verdict, u8) {
    let separation = normalized_score.abs();

    let verdict = if accuracy_percent < tuning.min_accuracy_for_verdict {
        Verdict::Inconclusive
    } else if normalized_score >= tuning.verdict_threshold {
        Verdict::Likely
    } else if normalized_score <= -tuning.verdict_threshold {
        Verdict::Unlikely
    } else {
        Verdict::Inconclusive
    };

    let confidence = (ACCURACY_WEIGHT * f64::from(accuracy_percent)
        + SEPARATION_WEIGHT * separation * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8;

    (verdict, confidence)
}
