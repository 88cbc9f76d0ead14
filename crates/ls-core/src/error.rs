//! Error types for ls-core

use thiserror::Error;

/// Core error type for Lakeshift.
///
/// The lexical engine itself never fails on input text; the only errors
/// surfaced to callers are configuration errors, validated once at entry
/// before any text is processed.
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Invalid maximum line length
    #[error("[C001] Invalid max_line_length: must be greater than zero")]
    InvalidMaxLineLength,

    /// C002: Empty replacement segment in a rewrite rule
    #[error("[C002] Invalid rewrite rule: {field} must not be empty when set")]
    EmptyReplacementName { field: &'static str },

    /// C003: Failed to parse a configuration document
    #[error("[C003] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// JSON serialization error (report output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
