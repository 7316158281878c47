//! Error handling for trilist
//!
//! Type-membership violations never reach this module: they are rejected by the
//! compiler. The only runtime failures are cursor misuse and asking an element
//! for a payload it does not hold.

use thiserror::Error;

use crate::storage::Tag;

/// Result type alias for trilist operations
pub type Result<T> = std::result::Result<T, TriListError>;

/// Main error type for trilist operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriListError {
    // Cursor Errors
    #[error("Cursor out of bounds: position {position} in a sequence of length {len}")]
    CursorOutOfBounds { position: usize, len: usize },

    // Element Errors
    #[error("Tag mismatch: expected {expected} payload, found {found}")]
    TagMismatch { expected: Tag, found: Tag },
}

impl TriListError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TriListError::CursorOutOfBounds { .. } => "CURSOR_OUT_OF_BOUNDS",
            TriListError::TagMismatch { .. } => "TAG_MISMATCH",
        }
    }

    /// Check if the caller can carry on with the same list after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            TriListError::CursorOutOfBounds { .. } => true,
            TriListError::TagMismatch { .. } => true,
        }
    }

    /// Get a short hint on how to avoid this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            TriListError::CursorOutOfBounds { .. } => {
                Some("Compare the cursor against begin() or end() before moving or reading it.")
            }
            TriListError::TagMismatch { .. } => {
                Some("Check Element::tag() or use Element::get() before extracting the payload.")
            }
        }
    }
}
