//! Static data loading.
//!
//! The question content and UI dictionaries are static JSON files under the
//! configured data directory:
//!
//! - `cases_{lang}.json`: `{ "pages": { "<page_id>": <assessment> } }`
//! - `ui_{lang}.json`: flat key-to-string dictionary
//!
//! Loading is a one-shot read-and-parse awaited before anything renders.
//! Any failure here is fatal for the session: the caller aborts startup
//! instead of continuing partially initialized.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::assessment::Assessment;
use crate::error::DataError;
use crate::i18n::{Language, Translator};

/// On-disk shape of an assessment content file.
#[derive(Debug, Deserialize)]
struct CaseFile {
    pages: HashMap<String, Assessment>,
}

/// Load and validate one assessment page from `cases_{lang}.json`.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read or parsed, when the
/// page id is not declared, or when the definition fails validation.
pub async fn load_assessment(
    data_dir: &Path,
    lang: Language,
    page_id: &str,
) -> Result<Assessment, DataError> {
    let path = data_dir.join(format!("cases_{}.json", lang.code()));
    let text = read_file(&path).await?;

    let file: CaseFile = parse_json(&path, &text)?;
    let assessment = file
        .pages
        .get(page_id)
        .cloned()
        .ok_or_else(|| DataError::MissingPage {
            page_id: page_id.to_string(),
        })?;

    assessment.validate()?;
    tracing::debug!(page_id, items = assessment.items.len(), "assessment loaded");
    Ok(assessment)
}

/// Load the UI dictionary for a language from `ui_{lang}.json`.
///
/// # Errors
///
/// Returns [`DataError`] when the file cannot be read or parsed.
pub async fn load_translator(data_dir: &Path, lang: Language) -> Result<Translator, DataError> {
    let path = data_dir.join(format!("ui_{}.json", lang.code()));
    let text = read_file(&path).await?;

    let dict: HashMap<String, String> = parse_json(&path, &text)?;
    Ok(Translator::new(lang, dict))
}

async fn read_file(path: &Path) -> Result<String, DataError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DataError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, DataError> {
    serde_json::from_str(text).map_err(|e| DataError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
