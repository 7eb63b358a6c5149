//! Error types for the assessment core.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`ModelError`]: Answer-state mutation and item lookup errors
//! - [`DataError`]: Static question/UI data loading errors
//! - [`StorageError`]: Page store operation errors
//! - [`ConfigError`]: Configuration errors
//!
//! Mutation-boundary errors ([`ModelError`]) are local and recoverable: the
//! caller drops the invalid interaction and carries on. Data-load errors are
//! fatal for the session; the system must not come up partially initialized.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Answer-state or item lookup error.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Static data loading error.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Page store error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Answer-state mutation and item lookup errors.
///
/// These are rejected at the mutation boundary and never reach the
/// scoring engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Response value outside the 1..=5 ordinal scale.
    #[error("Invalid response value {value}: must be between 1 and 5")]
    InvalidValue {
        /// The rejected value.
        value: i64,
    },

    /// Evidence index not declared by the referenced item.
    #[error("Evidence index {index} out of range for item {item_id}")]
    OutOfRange {
        /// The item id.
        item_id: String,
        /// The undeclared evidence index.
        index: usize,
    },

    /// Item id lookup miss. Indicates a data/authoring inconsistency.
    #[error("Item not found: {item_id}")]
    NotFound {
        /// The item id that was not found.
        item_id: String,
    },
}

/// Static data loading errors.
///
/// All of these are fatal at startup: without a question model there is
/// nothing to render or score.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A data file could not be read.
    #[error("Failed to read {path}: {message}")]
    ReadFailed {
        /// The file path.
        path: String,
        /// Description of the I/O failure.
        message: String,
    },

    /// A data file contained malformed JSON.
    #[error("Failed to parse {path}: {message}")]
    ParseFailed {
        /// The file path.
        path: String,
        /// Description of the parse failure.
        message: String,
    },

    /// The assessment file does not declare the requested page.
    #[error("Missing page in assessment data: {page_id}")]
    MissingPage {
        /// The page id that was not found.
        page_id: String,
    },

    /// The assessment definition failed validation.
    #[error("Invalid assessment definition: {message}")]
    Invalid {
        /// What is wrong with the definition.
        message: String,
    },
}

/// Page store errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
