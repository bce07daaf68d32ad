//! HTTP boundary errors shared by all API adapters.

use thiserror::Error;

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection refused, aborted)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The call exceeded the client-side timeout
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded as JSON
    #[error("failed to decode response: {0}")]
    Decode(String),
}
