//! Error types for the breaking change detector

use thiserror::Error;

/// Result type for detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Detector errors
///
/// A panicking rule check is a defect in that rule and is never mapped
/// into one of these variants.
#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Duplicate rule identifier in {category} registry: {identifier}")]
    DuplicateIdentifier { category: String, identifier: String },

    #[error("Invalid rule identifier: '{identifier}' (expected a lowercase kebab-case slug)")]
    InvalidIdentifier { identifier: String },

    #[error("Rule {identifier} uses unsupported placeholder {{{{{placeholder}}}}}")]
    UnsupportedPlaceholder { identifier: String, placeholder: String },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
