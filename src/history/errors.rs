//! History error types
//!
//! Error codes:
//! - HISTORY_INVALID_ARGUMENT
//! - HISTORY_NO_REVISIONS
//! - HISTORY_CONFIG_INVALID

use std::fmt;

use thiserror::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Stable error codes for history errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryErrorCode {
    /// A required argument was absent or malformed
    HistoryInvalidArgument,
    /// A revision was required from an empty history
    HistoryNoRevisions,
    /// History configuration could not be read
    HistoryConfigInvalid,
}

impl HistoryErrorCode {
    /// Returns the string code
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryErrorCode::HistoryInvalidArgument => "HISTORY_INVALID_ARGUMENT",
            HistoryErrorCode::HistoryNoRevisions => "HISTORY_NO_REVISIONS",
            HistoryErrorCode::HistoryConfigInvalid => "HISTORY_CONFIG_INVALID",
        }
    }
}

impl fmt::Display for HistoryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// History errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid argument: unknown revision type code {0}")]
    UnknownRevisionType(u8),

    #[error("No revisions available")]
    NoRevisions,

    #[error("Invalid history config: {0}")]
    Config(String),
}

impl HistoryError {
    /// Error for a required argument that was not supplied.
    pub fn missing(argument: &str) -> Self {
        HistoryError::InvalidArgument(format!("{} must not be absent", argument))
    }

    /// Get the error code
    pub fn code(&self) -> HistoryErrorCode {
        match self {
            HistoryError::InvalidArgument(_) | HistoryError::UnknownRevisionType(_) => {
                HistoryErrorCode::HistoryInvalidArgument
            }
            HistoryError::NoRevisions => HistoryErrorCode::HistoryNoRevisions,
            HistoryError::Config(_) => HistoryErrorCode::HistoryConfigInvalid,
        }
    }

    /// Returns true for invalid-argument failures
    pub fn is_invalid_argument(&self) -> bool {
        self.code() == HistoryErrorCode::HistoryInvalidArgument
    }
}
