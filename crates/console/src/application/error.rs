//! Application-level errors and call limits.

use thiserror::Error;

use crate::ports::outbound::ApiError;
use modera_domain::DomainError;

/// Errors produced by application services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The HTTP boundary failed (transport, timeout, server status)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A server response did not match the expected shape
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// A decision was submitted for an ad that is not in the cache
    #[error("ad {0} is not loaded")]
    NotLoaded(i64),

    /// A domain rule was violated before the call left the client
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Client-side timeout applied to every API call
pub fn get_request_timeout_ms() -> u64 {
    10_000
}

/// Decode a raw cached/fetched value into a typed response.
pub fn parse_value<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, ServiceError> {
    serde_json::from_value(value).map_err(|e| ServiceError::ParseError(e.to_string()))
}
