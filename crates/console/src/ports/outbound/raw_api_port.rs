//! Raw API Port - Object-safe HTTP boundary
//!
//! The UI/composition root needs an object-safe abstraction that can be
//! stored behind `Arc<dyn ...>`. Adapters implement this trait; application
//! services decode the raw `Value` responses into domain types.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn post_empty(&self, path: &str) -> Result<(), ApiError>;
}
