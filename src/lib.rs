//! Cognitive-function self-assessment scoring engine.
//!
//! Scores Likert-style questionnaire pages about cognitive-function
//! preferences, weighing each answer by its direction and adjusting for
//! corroborating real-life examples the respondent can (or cannot) recall.
//!
//! # Features
//!
//! - Direction-weighted Likert scoring with corroboration bonuses
//! - Self-report accuracy estimate and confidence bucketing
//! - Verdict classification with a dead band around neutral
//! - `SQLite` persistence for per-page answer sessions
//! - English/Vietnamese content and UI dictionaries loaded from JSON
//!
//! # Quick Start
//!
//! ```bash
//! PAGE_ID=ne_dom UI_LANG=en ./cog-assess
//! ```
//!
//! # Architecture
//!
//! ```text
//! data/cases_*.json ──▶ assessment ──┐
//!                                    ├──▶ scoring ──▶ report
//! SQLite ◀──▶ storage ──▶ session ───┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assessment;
pub mod config;
pub mod data;
pub mod error;
pub mod i18n;
pub mod report;
pub mod scoring;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test_utils;
