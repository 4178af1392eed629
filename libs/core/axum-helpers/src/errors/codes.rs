//! Error codes attached to error logs.
//!
//! Response bodies only carry `{"error": message}`; the code is emitted as a
//! structured `error_code` field on the log event so failures can be grouped
//! in monitoring.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidJson;
//! assert_eq!(code.as_str(), "INVALID_JSON");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};

/// Standardized error codes for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request argument could not be interpreted
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// Request body is not valid JSON
    InvalidJson,

    // Server errors (2000-2999)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// Returns the string representation used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Returns the integer code for monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::BadRequest => 1000,
            ErrorCode::NotFound => 1001,
            ErrorCode::InvalidJson => 1002,
            ErrorCode::InternalError => 2000,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
