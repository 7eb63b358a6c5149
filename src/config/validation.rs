//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

/// Validate a loaded configuration.
///
/// Checks:
/// - `page_id` is non-empty
/// - penalties are at most 100 (a single penalty larger than the whole
///   accuracy range is an authoring mistake)
/// - `ACCURACY_FLOOR` and `MIN_ACCURACY_FOR_VERDICT` are at most 100
/// - `VERDICT_THRESHOLD` lies strictly inside `(0, 1)`: zero removes the
///   dead band entirely and 1 makes a directional verdict unreachable
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] describing the first violation.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.page_id.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "PAGE_ID".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if config.tuning.cannot_corroborate_penalty > 100 {
        return Err(ConfigError::InvalidValue {
            var: "CANNOT_CORROBORATE_PENALTY".to_string(),
            reason: "must be at most 100".to_string(),
        });
    }

    if config.tuning.unconfirmed_strong_penalty > 100 {
        return Err(ConfigError::InvalidValue {
            var: "UNCONFIRMED_STRONG_PENALTY".to_string(),
            reason: "must be at most 100".to_string(),
        });
    }

    if config.tuning.accuracy_floor > 100 {
        return Err(ConfigError::InvalidValue {
            var: "ACCURACY_FLOOR".to_string(),
            reason: "must be at most 100".to_string(),
        });
    }

    if config.tuning.min_accuracy_for_verdict > 100 {
        return Err(ConfigError::InvalidValue {
            var: "MIN_ACCURACY_FOR_VERDICT".to_string(),
            reason: "must be at most 100".to_string(),
        });
    }

    if config.tuning.verdict_threshold <= 0.0 || config.tuning.verdict_threshold >= 1.0 {
        return Err(ConfigError::InvalidValue {
            var: "VERDICT_THRESHOLD".to_string(),
            reason: "must be strictly between 0 and 1".to_string(),
        });
    }

    Ok(())
}
