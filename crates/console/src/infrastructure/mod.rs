//! Infrastructure adapters for the outbound ports.

pub mod http;
pub mod platform;
pub mod query_cache;

pub use http::HttpApiAdapter;
pub use query_cache::MemoryQueryCache;
