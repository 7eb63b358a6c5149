//! Question model.
//!
//! An [`Assessment`] is the static, trusted definition of one questionnaire
//! page: a title, an intro paragraph, and an ordered list of [`Item`]s. It is
//! deserialized from the assessment JSON contract and never mutated after
//! load.
//!
//! # Data Contract
//!
//! ```json
//! {
//!   "title": "Ne-dominant check",
//!   "intro": "...",
//!   "items": [
//!     { "id": "ne_1", "text": "...", "dir": 1, "examples": ["...", "..."] }
//!   ]
//! }
//! ```
//!
//! `dir` defaults to `+1` and `examples` to empty when omitted.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, ModelError};

/// Default item direction when the JSON omits `dir`.
const fn default_direction() -> i32 {
    1
}

/// One scale question belonging to an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier within the assessment.
    pub id: String,
    /// Prompt shown to the respondent. Opaque to scoring.
    pub text: String,
    /// Signed weight. Negative values reverse-score the item; the magnitude
    /// scales its contribution.
    #[serde(default = "default_direction")]
    pub dir: i32,
    /// Corroborating-evidence prompts, shown for strong responses.
    /// May be empty.
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Item {
    /// Create an item with the default `+1` direction and no evidence prompts.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            dir: 1,
            examples: Vec::new(),
        }
    }

    /// Set the direction.
    #[must_use]
    pub fn with_direction(mut self, dir: i32) -> Self {
        self.dir = dir;
        self
    }

    /// Add corroborating-evidence prompts.
    #[must_use]
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    /// Whether the item declares at least one evidence prompt.
    #[must_use]
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }
}

/// Static definition of one questionnaire page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assessment {
    /// Page title.
    pub title: String,
    /// Intro paragraph shown above the questions.
    #[serde(default)]
    pub intro: String,
    /// Items in authoring order.
    pub items: Vec<Item>,
}

impl Assessment {
    /// Create an assessment from a list of items.
    #[must_use]
    pub fn new(title: impl Into<String>, intro: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            intro: intro.into(),
            items,
        }
    }

    /// Items in stable authoring order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Look up an item by id.
    ///
    /// A miss is a data-integrity bug, not a user-facing error: the answer
    /// state only ever references ids handed out by this model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotFound`] when no item has the given id.
    pub fn item(&self, item_id: &str) -> Result<&Item, ModelError> {
        self.items
            .iter()
            .find(|it| it.id == item_id)
            .ok_or_else(|| ModelError::NotFound {
                item_id: item_id.to_string(),
            })
    }

    /// Validate the definition after load.
    ///
    /// Duplicate ids are rejected. A zero direction makes the item inert;
    /// that is permitted but almost certainly an authoring mistake, so it is
    /// logged rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Invalid`] on duplicate item ids.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = std::collections::BTreeSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(DataError::Invalid {
                    message: format!("duplicate item id: {}", item.id),
                });
            }
            if item.dir == 0 {
                tracing::warn!(item_id = %item.id, "item has zero direction and cannot contribute to the score");
            }
        }
        Ok(())
    }
}
