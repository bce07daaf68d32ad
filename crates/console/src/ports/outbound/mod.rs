//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with external
//! systems without depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod platform_port;
pub mod query_cache;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use platform::{storage_keys, DocumentProvider, LogProvider, StorageProvider, TimeProvider};
pub use platform_port::PlatformPort;
pub use query_cache::{FetchTicket, QueryCachePort, QueryKey};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
