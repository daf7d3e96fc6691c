//! Core error types for minegocio-core.
//!
//! This module defines the error hierarchy using thiserror. Note that the
//! progression engine itself never errors for well-formed input: malformed
//! completion events are a caller contract violation ([`ContractError`])
//! and are rejected at the boundary, before any state-transition math.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for minegocio-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caller contract violations
    #[error("Contract violation: {0}")]
    Contract(#[from] ContractError),

    /// Assistant transport errors (internal; callers see a fallback string)
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Caller contract violations, rejected before reaching the progression
/// engine's state-transition math.
#[derive(Error, Debug)]
pub enum ContractError {
    /// An achievement identifier outside the fixed catalog
    #[error("Unknown achievement identifier: '{0}'")]
    UnknownAchievement(String),

    /// A completion event must carry a positive point reward
    #[error("Completion reward must be positive (got {points})")]
    NonPositiveReward { points: u32 },

    /// A module was asked to complete before its completeness rule held
    #[error("Module '{module}' is not complete: {reason}")]
    Incomplete { module: String, reason: String },

    /// A manual section identifier outside the built-in catalog
    #[error("Unknown manual section: '{0}'")]
    UnknownSection(String),
}

/// Assistant-specific errors. These never propagate to the user: the
/// assistant maps every failure to a fixed fallback message.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but not in the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
