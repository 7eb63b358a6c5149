//! Score result types.

use serde::{Deserialize, Serialize};

/// Confidence in the quality of the answer data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLabel {
    /// Sparse or contradicted data.
    Low,
    /// Usable data with some gaps.
    Medium,
    /// Well-supported data with clear separation.
    High,
}

impl std::fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Categorical conclusion about the trait being measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The trait is likely present.
    Likely,
    /// The trait is likely absent.
    Unlikely,
    /// The data does not support a directional claim.
    Inconclusive,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Likely => write!(f, "likely"),
            Self::Unlikely => write!(f, "unlikely"),
            Self::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// Full scoring output for one assessment page.
///
/// Derived data, recomputed on demand. A serialized copy may ride along in
/// the stored page payload for display, but is never read back as source of
/// truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Signed raw sum of directed, centered contributions plus bonuses.
    pub raw_score: i64,
    /// Raw score divided by the item set's maximum magnitude, in `[-1, 1]`.
    pub normalized_score: f64,
    /// Monotonic rescaling of the normalized score to `[0, 100]`.
    pub likelihood_percent: u8,
    /// Penalty-adjusted confidence in the data, floored so the metric never
    /// implies total unreliability.
    pub accuracy_percent: u8,
    /// Coarse confidence bucket derived from accuracy and separation.
    pub confidence: ConfidenceLabel,
    /// Categorical conclusion.
    pub verdict: Verdict,
    /// Confidence in the verdict, in `[0, 100]`.
    pub verdict_confidence_percent: u8,
    /// Items flagged cannot-corroborate among the answered set.
    pub cannot_corroborate_count: u32,
    /// Strong answers with declared but unchecked evidence prompts.
    pub unconfirmed_strong_count: u32,
    /// Items with a recorded response.
    pub answered: u32,
}
