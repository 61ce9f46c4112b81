//! Error types for parser configuration.
//!
//! Parsing itself never fails: malformed CSS degrades to fewer nodes or to
//! defective declarations.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration text is not valid JSON for [`crate::ParserConfig`].
    #[error("invalid parser configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A container at-rule keyword is not an identifier.
    #[error("invalid container at-rule '{0}': expected an identifier without '@'")]
    InvalidAtRule(String),
}
