//! Error types for fallible value conversions
//!
//! [`crate::normalize`] itself is total and never produces an error; these
//! types cover the typed extraction surface (`TryFrom` conversions and
//! timestamp parsing).

use thiserror::Error;

/// Main error type for Flattext operations
#[derive(Error, Debug)]
pub enum FlattextError {
    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// Timestamp text that is not valid ISO-8601
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl FlattextError {
    /// Build a type error from the expected type name and the offending value's kind
    pub fn type_error(expected: impl Into<String>, got: impl Into<String>) -> Self {
        FlattextError::TypeError {
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Result type alias for Flattext operations
pub type Result<T> = std::result::Result<T, FlattextError>;
