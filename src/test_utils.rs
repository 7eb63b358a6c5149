//! Shared test fixtures.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::assessment::{Assessment, Item};
use crate::session::AnswerState;

/// Build an assessment of `n` plain items with ids `q0..qN`.
///
/// Every item scores in the positive direction and declares no
/// corroboration prompts.
#[must_use]
pub fn plain_items(n: usize) -> Assessment {
    let items = (0..n)
        .map(|i| Item::new(format!("q{i}"), format!("Statement {i}")))
        .collect();
    Assessment::new("Test page", "", items)
}

/// Build an answer state holding the given `(item_id, value)` responses.
pub fn state_with_responses(assessment: &Assessment, responses: &[(&str, u8)]) -> AnswerState {
    let mut state = AnswerState::new();
    for (item_id, value) in responses {
        state
            .set_response(assessment, item_id, *value)
            .expect("fixture response is valid");
    }
    state
}
