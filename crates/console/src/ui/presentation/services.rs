//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` (via the hooks below) to access services
//! without depending on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use futures_util::StreamExt;

use crate::application::services::{
    AdService, DecisionService, PreferencesService, StatsService,
};
use crate::infrastructure::MemoryQueryCache;
use crate::ports::outbound::{QueryCachePort, RawApiPort};
use crate::state::{Platform, PlatformStorageAdapter};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    /// Shared query cache; also the change-notification source for the UI
    pub cache: Arc<MemoryQueryCache>,
    pub ads: Arc<AdService>,
    pub decisions: Arc<DecisionService>,
    pub stats: Arc<StatsService>,
    pub preferences: Arc<PreferencesService<PlatformStorageAdapter>>,
}

impl Services {
    /// Create all services with the given ports
    pub fn new(api: Arc<dyn RawApiPort>, cache: Arc<MemoryQueryCache>, platform: &Platform) -> Self {
        let cache_port: Arc<dyn QueryCachePort> = cache.clone();
        Self {
            cache: cache.clone(),
            ads: Arc::new(AdService::new(api.clone(), cache_port.clone())),
            decisions: Arc::new(DecisionService::new(
                api.clone(),
                cache_port.clone(),
                Arc::new(platform.clone()),
            )),
            stats: Arc::new(StatsService::new(api, cache_port)),
            preferences: Arc::new(PreferencesService::new(platform.storage_adapter())),
        }
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the AdService from context
pub fn use_ad_service() -> Arc<AdService> {
    use_services().ads
}

/// Hook to access the DecisionService from context
pub fn use_decision_service() -> Arc<DecisionService> {
    use_services().decisions
}

/// Hook to access the StatsService from context
pub fn use_stats_service() -> Arc<StatsService> {
    use_services().stats
}

/// Hook to access the PreferencesService from context
pub fn use_preferences() -> Arc<PreferencesService<PlatformStorageAdapter>> {
    use_services().preferences
}

/// Cache change subscription as a reactive epoch counter.
///
/// Resources read the returned signal so they re-run whenever the query
/// cache changes (optimistic writes, rollbacks, invalidations). Fresh
/// entries are then served from the cache without a network round trip.
pub fn use_cache_epoch() -> Signal<u64> {
    let services = use_services();
    let mut epoch = use_signal(|| 0u64);
    use_hook(move || {
        let mut changes = services.cache.watch();
        spawn(async move {
            while changes.next().await.is_some() {
                epoch += 1;
            }
        });
    });
    epoch
}
