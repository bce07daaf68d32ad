//! Application layer - Use cases and orchestration

pub mod dto;
pub mod error;
pub mod services;

// Re-export common types
pub use error::{get_request_timeout_ms, parse_value, ServiceError};
