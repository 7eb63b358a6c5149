//! Answer state.
//!
//! [`AnswerState`] holds one respondent's in-progress answers for a single
//! page: the ordinal response per item, the checked corroborating-evidence
//! entries, and the per-item cannot-corroborate admissions. The three maps
//! are kept referentially consistent by the mutators:
//!
//! - downgrading a response below strong retracts the item's evidence claims
//!   (checked entries and the cannot-corroborate flag);
//! - checking any evidence entry clears the item's cannot-corroborate flag;
//! - flagging cannot-corroborate clears the item's checked entries.
//!
//! The two evidence signals are mutually exclusive per item, last-write-wins.
//!
//! State is serialized wholesale to the page store as a [`PagePayload`] on an
//! explicit save, never implicitly, and hydrated back losslessly.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::error::ModelError;
use crate::scoring::{is_strong, ScoreResult};

/// Identifies one corroborating-evidence entry: the owning item plus the
/// prompt's position in the item's `examples` list.
///
/// A structured pair rather than an `"<item_id>__ex<index>"` composite
/// string, so nothing ever parses ids back apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct EvidenceKey {
    /// The owning item's id.
    pub item_id: String,
    /// Zero-based index into the item's evidence prompts.
    pub index: usize,
}

impl EvidenceKey {
    /// Create a key for the given item and evidence index.
    #[must_use]
    pub fn new(item_id: impl Into<String>, index: usize) -> Self {
        Self {
            item_id: item_id.into(),
            index,
        }
    }
}

/// Serialized page payload: the persistence contract shape.
///
/// `scores` is a display cache only. Hydration restores the three maps and
/// the timestamp; scores are always recomputed from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagePayload {
    /// Response value per item id, each in `1..=5`.
    pub answers: BTreeMap<String, u8>,
    /// Checked corroborating-evidence entries.
    #[serde(default)]
    pub evidence: BTreeSet<EvidenceKey>,
    /// Items flagged as cannot-corroborate.
    #[serde(default)]
    pub cannot_corroborate: BTreeSet<String>,
    /// Cached score snapshot from the last save, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreResult>,
    /// When the state was last mutated.
    pub updated_at: DateTime<Utc>,
}

/// One respondent's in-progress answers for a single assessment page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerState {
    responses: BTreeMap<String, u8>,
    evidence: BTreeSet<EvidenceKey>,
    cannot_corroborate: BTreeSet<String>,
    updated_at: DateTime<Utc>,
}

impl Default for AnswerState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerState {
    /// Create an empty answer state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: BTreeMap::new(),
            evidence: BTreeSet::new(),
            cannot_corroborate: BTreeSet::new(),
            updated_at: Utc::now(),
        }
    }

    /// The recorded response for an item, if any.
    #[must_use]
    pub fn response(&self, item_id: &str) -> Option<u8> {
        self.responses.get(item_id).copied()
    }

    /// Number of items with a recorded response.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Whether a specific evidence entry is checked.
    #[must_use]
    pub fn evidence_checked(&self, item_id: &str, index: usize) -> bool {
        self.evidence.contains(&EvidenceKey::new(item_id, index))
    }

    /// Whether any evidence entry is checked for an item.
    #[must_use]
    pub fn any_evidence_checked(&self, item_id: &str) -> bool {
        self.evidence.iter().any(|k| k.item_id == item_id)
    }

    /// Whether the item carries the cannot-corroborate admission.
    #[must_use]
    pub fn cannot_corroborate(&self, item_id: &str) -> bool {
        self.cannot_corroborate.contains(item_id)
    }

    /// When the state was last mutated.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Record a response for an item.
    ///
    /// A non-strong value retracts the item's evidence claims: the stronger
    /// answer they supported is gone, so the checked entries and the
    /// cannot-corroborate flag go with it. Repeating a downgrade is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] for an unknown item id and
    /// [`ModelError::InvalidValue`] for a value outside `1..=5`.
    pub fn set_response(
        &mut self,
        assessment: &Assessment,
        item_id: &str,
        value: u8,
    ) -> Result<(), ModelError> {
        assessment.item(item_id)?;
        if !(1..=5).contains(&value) {
            return Err(ModelError::InvalidValue {
                value: i64::from(value),
            });
        }

        self.responses.insert(item_id.to_string(), value);
        if !is_strong(value) {
            self.cannot_corroborate.remove(item_id);
            self.clear_evidence_for(item_id);
        }
        self.touch();
        Ok(())
    }

    /// Check or uncheck one corroborating-evidence entry.
    ///
    /// Checking an entry clears the item's cannot-corroborate flag: the
    /// respondent just cited evidence after all.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] for an unknown item id and
    /// [`ModelError::OutOfRange`] when the item does not declare the index.
    pub fn toggle_evidence(
        &mut self,
        assessment: &Assessment,
        item_id: &str,
        index: usize,
        on: bool,
    ) -> Result<(), ModelError> {
        let item = assessment.item(item_id)?;
        if index >= item.examples.len() {
            return Err(ModelError::OutOfRange {
                item_id: item_id.to_string(),
                index,
            });
        }

        if on {
            self.evidence.insert(EvidenceKey::new(item_id, index));
            self.cannot_corroborate.remove(item_id);
        } else {
            self.evidence.remove(&EvidenceKey::new(item_id, index));
        }
        self.touch();
        Ok(())
    }

    /// Set or clear the cannot-corroborate admission for an item.
    ///
    /// Turning it on clears the item's checked evidence entries. Turning it
    /// off leaves the response untouched; whether to prompt for a new answer
    /// is the presentation layer's call.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] for an unknown item id.
    pub fn set_cannot_corroborate(
        &mut self,
        assessment: &Assessment,
        item_id: &str,
        on: bool,
    ) -> Result<(), ModelError> {
        assessment.item(item_id)?;

        if on {
            self.cannot_corroborate.insert(item_id.to_string());
            self.clear_evidence_for(item_id);
        } else {
            self.cannot_corroborate.remove(item_id);
        }
        self.touch();
        Ok(())
    }

    /// Serialize the state into a page payload without a score cache.
    #[must_use]
    pub fn serialize(&self) -> PagePayload {
        self.serialize_with_scores(None)
    }

    /// Serialize the state into a page payload, caching the given scores.
    #[must_use]
    pub fn serialize_with_scores(&self, scores: Option<ScoreResult>) -> PagePayload {
        PagePayload {
            answers: self.responses.clone(),
            evidence: self.evidence.clone(),
            cannot_corroborate: self.cannot_corroborate.clone(),
            scores,
            updated_at: self.updated_at,
        }
    }

    /// Rebuild the state from a persisted payload.
    ///
    /// The payload's cached scores are ignored; scores are derived data and
    /// are recomputed from the maps.
    #[must_use]
    pub fn hydrate(payload: PagePayload) -> Self {
        Self {
            responses: payload.answers,
            evidence: payload.evidence,
            cannot_corroborate: payload.cannot_corroborate,
            updated_at: payload.updated_at,
        }
    }

    fn clear_evidence_for(&mut self, item_id: &str) {
        self.evidence.retain(|k| k.item_id != item_id);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
