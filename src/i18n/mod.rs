//! Localization.
//!
//! UI text lives in flat JSON dictionaries (`ui_en.json`, `ui_vi.json`),
//! one string per key. The [`Translator`] is an explicit value handed to
//! whoever renders text; there is no process-global language state.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Vietnamese.
    Vi,
}

impl Language {
    /// The two-letter code used in file names and persisted settings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(ConfigError::InvalidValue {
                var: "UI_LANG".to_string(),
                reason: format!("unsupported language code '{other}': must be 'en' or 'vi'"),
            }),
        }
    }
}

/// Key-to-string lookup over one language's UI dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
    dict: HashMap<String, String>,
}

impl Translator {
    /// Build a translator from a parsed dictionary.
    #[must_use]
    pub const fn new(lang: Language, dict: HashMap<String, String>) -> Self {
        Self { lang, dict }
    }

    /// An empty translator: every lookup falls back.
    #[must_use]
    pub fn empty(lang: Language) -> Self {
        Self::new(lang, HashMap::new())
    }

    /// The translator's language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.lang
    }

    /// Look up a key, falling back to the given default when absent.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.dict.get(key).map_or(fallback, String::as_str)
    }
}
