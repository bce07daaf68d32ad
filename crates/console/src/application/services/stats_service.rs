//! Stats Service - read-only moderation statistics
//!
//! Four independent endpoints feed the statistics view. Each one caches
//! under its own `["stats", ...]` key; nothing in the console invalidates
//! them, so they refetch only on restart.

use std::sync::Arc;

use crate::application::{parse_value, ServiceError};
use crate::ports::outbound::{QueryCachePort, QueryKey, RawApiPort};
use modera_domain::{ActivityPoint, CategoryCounts, DecisionBreakdown, StatsSummary};

use super::fetch_through_cache;

pub struct StatsService {
    api: Arc<dyn RawApiPort>,
    cache: Arc<dyn QueryCachePort>,
}

impl StatsService {
    pub fn new(api: Arc<dyn RawApiPort>, cache: Arc<dyn QueryCachePort>) -> Self {
        Self { api, cache }
    }

    pub async fn summary(&self) -> Result<StatsSummary, ServiceError> {
        self.fetch("summary", "/stats/summary").await
    }

    /// Daily decision counts for the activity line chart
    pub async fn activity(&self) -> Result<Vec<ActivityPoint>, ServiceError> {
        self.fetch("activity", "/stats/chart/activity").await
    }

    /// Totals per decision kind for the pie chart
    pub async fn decisions(&self) -> Result<DecisionBreakdown, ServiceError> {
        self.fetch("decisions", "/stats/chart/decisions").await
    }

    /// Reviewed-ads count per category for the bar chart
    pub async fn categories(&self) -> Result<CategoryCounts, ServiceError> {
        self.fetch("categories", "/stats/chart/categories").await
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        section: &str,
        path: &str,
    ) -> Result<T, ServiceError> {
        let key = QueryKey::stats(section);
        let value = fetch_through_cache(&self.api, &self.cache, &key, path).await?;
        parse_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::query_cache::MemoryQueryCache;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    #[tokio::test]
    async fn each_section_caches_under_its_own_key() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|path| path == "/stats/summary")
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "totalReviewed": 120,
                    "totalReviewedToday": 5,
                    "totalReviewedThisWeek": 30,
                    "totalReviewedThisMonth": 80
                }))
            });
        api.expect_get_json()
            .withf(|path| path == "/stats/chart/decisions")
            .times(1)
            .returning(|_| Ok(json!({"approved": 70, "rejected": 30, "requestChanges": 20})));
        let cache = Arc::new(MemoryQueryCache::new());
        let service = StatsService::new(Arc::new(api), cache);

        let summary = service.summary().await.expect("summary");
        assert_eq!(summary.total_reviewed, 120);
        let breakdown = service.decisions().await.expect("decisions");
        assert_eq!(breakdown.total(), 120);
        // Both are cached now; no further network calls.
        service.summary().await.expect("cached summary");
        service.decisions().await.expect("cached decisions");
    }
}
