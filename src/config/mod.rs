//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//! - Scoring tuning overrides
//!
//! The scoring constants are deliberately configuration, not fixed
//! requirements; the defaults can be overridden per deployment.
//!
//! # Example
//!
//! ```
//! use cog_assess::config::Config;
//! use cog_assess::i18n::Language;
//!
//! let config = Config::default();
//! assert_eq!(config.lang, Language::En);
//! assert_eq!(config.page_id, "ne_dom");
//! ```

mod validation;

pub use validation::validate_config;

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::i18n::Language;
use crate::scoring::ScoringTuning;

/// Default data directory holding the static JSON files.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Default page store path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/assessments.db";

/// Default assessment page.
pub const DEFAULT_PAGE_ID: &str = "ne_dom";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment
/// variables; [`Config::default`] gives the documented defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `cases_{lang}.json` and `ui_{lang}.json`.
    pub data_dir: PathBuf,
    /// Page store database path.
    pub database_path: String,
    /// UI language.
    pub lang: Language,
    /// Assessment page the binary runs.
    pub page_id: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Scoring constants, defaults overridable from the environment.
    pub tuning: ScoringTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            lang: Language::En,
            page_id: DEFAULT_PAGE_ID.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            tuning: ScoringTuning::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional (with defaults):
    /// - `DATA_DIR`: static data directory (default: `./data`)
    /// - `DATABASE_PATH`: page store path (default: `./data/assessments.db`)
    /// - `UI_LANG`: UI language, `en` or `vi` (default: `en`)
    /// - `PAGE_ID`: assessment page to run (default: `ne_dom`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    /// - `CANNOT_CORROBORATE_PENALTY`: accuracy penalty per admission (default: `10`)
    /// - `UNCONFIRMED_STRONG_PENALTY`: accuracy penalty per unconfirmed strong claim (default: `3`)
    /// - `ACCURACY_FLOOR`: lower bound for the accuracy metric (default: `25`)
    /// - `MIN_ACCURACY_FOR_VERDICT`: accuracy gate for directional verdicts (default: `55`)
    /// - `VERDICT_THRESHOLD`: dead-band half-width (default: `0.18`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value cannot be parsed or fails
    /// validation (see [`validate_config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let lang = match std::env::var("UI_LANG") {
            Ok(val) => val.parse::<Language>()?,
            Err(_) => Language::En,
        };

        let page_id = std::env::var("PAGE_ID").unwrap_or_else(|_| DEFAULT_PAGE_ID.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let defaults = ScoringTuning::default();
        let tuning = ScoringTuning {
            cannot_corroborate_penalty: parse_env_u32(
                "CANNOT_CORROBORATE_PENALTY",
                defaults.cannot_corroborate_penalty,
            )?,
            unconfirmed_strong_penalty: parse_env_u32(
                "UNCONFIRMED_STRONG_PENALTY",
                defaults.unconfirmed_strong_penalty,
            )?,
            accuracy_floor: parse_env_u8("ACCURACY_FLOOR", defaults.accuracy_floor)?,
            min_accuracy_for_verdict: parse_env_u8(
                "MIN_ACCURACY_FOR_VERDICT",
                defaults.min_accuracy_for_verdict,
            )?,
            verdict_threshold: parse_env_f64("VERDICT_THRESHOLD", defaults.verdict_threshold)?,
            ..defaults
        };

        let config = Self {
            data_dir: PathBuf::from(data_dir),
            database_path,
            lang,
            page_id,
            log_level,
            tuning,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}

/// Parse an environment variable as u8, using a default if not set.
fn parse_env_u8(name: &str, default: u8) -> Result<u8, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be an integer between 0 and 255".into(),
        })
    })
}

/// Parse an environment variable as f64, using a default if not set.
fn parse_env_f64(name: &str, default: f64) -> Result<f64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a number".into(),
        })
    })
}
