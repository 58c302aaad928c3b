//! Error types for the comparison widget.
//!
//! [`CompareError`] covers everything that can fail before or around the
//! render pipeline: loading the catalog, parsing configuration and themes,
//! decoding host events and writing to an output sink. The pipeline itself
//! never fails; a lookup miss or a missing attribute is resolved locally.

use thiserror::Error;

/// The main error type for comparison widget operations.
///
/// ```
/// use compara::CompareError;
///
/// let err = CompareError::InvalidSlot(3);
/// assert_eq!(err.to_string(), "Invalid slot: 3 (expected 1 or 2)");
/// ```
#[derive(Debug, Error)]
pub enum CompareError {
    /// Filesystem or stream I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog document is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog breaks a structural invariant (missing structural key,
    /// duplicate `Name`).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A slot number other than 1 or 2.
    #[error("Invalid slot: {0} (expected 1 or 2)")]
    InvalidSlot(u8),

    /// A host event line that cannot be decoded.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

/// A specialized `Result` type for comparison widget operations.
pub type Result<T> = std::result::Result<T, CompareError>;
