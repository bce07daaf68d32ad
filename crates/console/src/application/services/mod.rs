//! Application services
//!
//! Use case implementations for the moderation console. Services depend on
//! port traits, not concrete infrastructure implementations.

use std::sync::Arc;

use serde_json::Value;

use crate::application::ServiceError;
use crate::ports::outbound::{QueryCachePort, QueryKey, RawApiPort};

pub mod ad_service;
pub mod decision_service;
pub mod preferences_service;
pub mod stats_service;

pub use ad_service::AdService;
pub use decision_service::{DecisionPhase, DecisionService, REASON_PRESETS};
pub use preferences_service::{PreferencesService, ThemeMode};
pub use stats_service::StatsService;

/// Serve the key from the cache when fresh, otherwise fetch and commit.
///
/// The commit goes through the cache's fetch ticket, so a `cancel` issued
/// while the request was in flight wins over the response.
pub(crate) async fn fetch_through_cache(
    api: &Arc<dyn RawApiPort>,
    cache: &Arc<dyn QueryCachePort>,
    key: &QueryKey,
    path: &str,
) -> Result<Value, ServiceError> {
    if let Some(value) = cache.get(key) {
        if !cache.is_stale(key) {
            return Ok(value);
        }
    }
    let ticket = cache.begin_fetch(key);
    let fetched = api.get_json(path).await?;
    if cache.try_commit(&ticket, fetched.clone()) {
        return Ok(fetched);
    }
    tracing::debug!(%key, "fetch was cancelled mid-flight, keeping newer cache state");
    Ok(cache.get(key).unwrap_or(fetched))
}
