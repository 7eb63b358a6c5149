//! Plain-text score report rendering.
//!
//! Headless counterpart of the score widgets: the engine computes a
//! [`ScoreResult`](crate::scoring::ScoreResult) and this module turns it
//! into localized lines suitable for a terminal.

use std::fmt::Write as _;

use crate::assessment::Assessment;
use crate::i18n::Translator;
use crate::scoring::{ConfidenceLabel, ScoreResult, Verdict};

/// Render a localized text report for one scored assessment.
#[must_use]
pub fn render(assessment: &Assessment, result: &ScoreResult, translator: &Translator) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", assessment.title);
    let _ = writeln!(out, "{}", "=".repeat(assessment.title.chars().count()));

    let _ = writeln!(
        out,
        "{}: {}/{}",
        translator.translate("answered_label", "Answered"),
        result.answered,
        assessment.items.len()
    );
    let _ = writeln!(
        out,
        "{}: {}",
        translator.translate("score_label", "Score"),
        result.likelihood_percent
    );
    let _ = writeln!(
        out,
        "{}: {}%",
        translator.translate("accuracy_label", "Accuracy"),
        result.accuracy_percent
    );
    let _ = writeln!(
        out,
        "{}: {}",
        translator.translate("confidence_label", "Confidence"),
        confidence_text(result.confidence, translator)
    );
    let _ = writeln!(
        out,
        "{}: {}",
        translator.translate("verdict_label", "Verdict"),
        verdict_text(result, translator)
    );

    if result.cannot_corroborate_count > 0 {
        let _ = writeln!(
            out,
            "{}: {}",
            translator.translate("cant_recall_count_label", "Marked can't recall"),
            result.cannot_corroborate_count
        );
    }
    if result.unconfirmed_strong_count > 0 {
        let _ = writeln!(
            out,
            "{}: {}",
            translator.translate("unconfirmed_count_label", "Strong answers without examples"),
            result.unconfirmed_strong_count
        );
    }

    out
}

fn confidence_text<'a>(confidence: ConfidenceLabel, translator: &'a Translator) -> &'a str {
    match confidence {
        ConfidenceLabel::High => translator.translate("conf_high", "High"),
        ConfidenceLabel::Medium => translator.translate("conf_med", "Medium"),
        ConfidenceLabel::Low => translator.translate("conf_low", "Low"),
    }
}

fn verdict_text(result: &ScoreResult, translator: &Translator) -> String {
    match result.verdict {
        Verdict::Likely => format!(
            "{} ({}%)",
            translator.translate("verdict_likely", "Likely"),
            result.verdict_confidence_percent
        ),
        Verdict::Unlikely => format!(
            "{} ({}%)",
            translator.translate("verdict_unlikely", "Unlikely"),
            result.verdict_confidence_percent
        ),
        Verdict::Inconclusive => translator
            .translate("verdict_inconclusive", "Inconclusive")
            .to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::scoring::{score, ScoringTuning};
    use crate::test_utils::{plain_items, state_with_responses};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn scored(responses: &[(&str, u8)]) -> (Assessment, ScoreResult) {
        let assessment = plain_items(4);
        let state = state_with_responses(&assessment, responses);
        let result = score(&assessment, &state, &ScoringTuning::default());
        (assessment, result)
    }

    #[test]
    fn test_report_contains_all_metrics() {
        let (assessment, result) = scored(&[("q0", 5), ("q1", 5), ("q2", 5), ("q3", 5)]);
        let report = render(&assessment, &result, &Translator::empty(Language::En));

        assert!(report.contains("Answered: 4/4"));
        assert!(report.contains("Score: 100"));
        assert!(report.contains("Accuracy: 100%"));
        assert!(report.contains("Confidence: High"));
        assert!(report.contains("Likely (100%)"));
    }

    #[test]
    fn test_inconclusive_verdict_has_no_percent() {
        let (assessment, result) = scored(&[("q0", 3)]);
        let report = render(&assessment, &result, &Translator::empty(Language::En));

        assert!(report.contains("Verdict: Inconclusive"));
        assert!(!report.contains("Inconclusive ("));
    }

    #[test]
    fn test_translated_labels_win_over_fallbacks() {
        let mut dict = HashMap::new();
        dict.insert("conf_low".to_string(), "Thấp".to_string());
        dict.insert("verdict_inconclusive".to_string(), "Chưa rõ".to_string());
        let translator = Translator::new(Language::Vi, dict);

        let (assessment, result) = scored(&[("q0", 3)]);
        let report = render(&assessment, &result, &translator);

        assert!(report.contains("Thấp"));
        assert!(report.contains("Chưa rõ"));
        assert!(!report.contains("Inconclusive"));
    }

    #[test]
    fn test_flag_counters_only_shown_when_nonzero() {
        let (assessment, result) = scored(&[("q0", 2)]);
        let report = render(&assessment, &result, &Translator::empty(Language::En));

        assert!(!report.contains("can't recall"));
        assert!(!report.contains("without examples"));
        assert_eq!(report.lines().count(), 7);
    }
}
