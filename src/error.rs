//! Error types for token operations.

use thiserror::Error;

/// Errors that can occur when generating or parsing a token.
///
/// Every variant is a validation failure raised at the point of detection;
/// none are transient and none are worth retrying.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Prefix is empty, longer than six characters, or not alphanumeric.
    #[error("invalid token prefix")]
    InvalidPrefix,

    /// Requested random length is outside the allowed 30..=242 range.
    #[error("invalid token length")]
    InvalidLength,

    /// Input string does not match the token structure (wrong length,
    /// wrong character classes, missing separator).
    #[error("invalid token format")]
    InvalidFormat,

    /// Structure is valid but the embedded checksum does not match the
    /// one recomputed from the random segment. Signals corruption or a
    /// typo, not a format bug.
    #[error("invalid token checksum")]
    InvalidChecksum,
}

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
