//! Ad Service - read side of the moderation console
//!
//! Loads the filtered list pages and single ad details through the query
//! cache, so views re-render from cached state and only hit the network
//! when an entry is missing or stale.

use std::sync::Arc;

use crate::application::dto::ListQuery;
use crate::application::{parse_value, ServiceError};
use crate::ports::outbound::{QueryCachePort, QueryKey, RawApiPort};
use modera_domain::{Ad, AdPage};

use super::fetch_through_cache;

pub struct AdService {
    api: Arc<dyn RawApiPort>,
    cache: Arc<dyn QueryCachePort>,
}

impl AdService {
    pub fn new(api: Arc<dyn RawApiPort>, cache: Arc<dyn QueryCachePort>) -> Self {
        Self { api, cache }
    }

    /// Load one page of the filtered ad list.
    pub async fn page(&self, query: &ListQuery) -> Result<AdPage, ServiceError> {
        let key = query.cache_key();
        let value = fetch_through_cache(&self.api, &self.cache, &key, &query.api_path()).await?;
        parse_value(value)
    }

    /// Load the full detail of a single ad.
    pub async fn ad(&self, id: i64) -> Result<Ad, ServiceError> {
        let key = QueryKey::ad(id);
        let path = format!("/ads/{id}");
        let value = fetch_through_cache(&self.api, &self.cache, &key, &path).await?;
        parse_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::query_cache::MemoryQueryCache;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    fn ad_value(id: i64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "iPhone 14",
            "description": "Новый, в коробке",
            "price": 65000,
            "category": "Электроника",
            "status": status,
            "priority": "normal",
            "seller": {
                "name": "Иван",
                "rating": "4.8",
                "totalAds": 12,
                "registeredAt": "2024-01-10T00:00:00Z"
            },
            "moderationHistory": []
        })
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|path| path == "/ads/42")
            .times(1)
            .returning(|_| Ok(ad_value(42, "pending")));
        let cache = Arc::new(MemoryQueryCache::new());
        let service = AdService::new(Arc::new(api), cache);

        let first = service.ad(42).await.expect("first load");
        let second = service.ad(42).await.expect("cached load");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .times(2)
            .returning(|_| Ok(ad_value(42, "pending")));
        let cache = Arc::new(MemoryQueryCache::new());
        let service = AdService::new(Arc::new(api), cache.clone());

        service.ad(42).await.expect("first load");
        cache.invalidate(&QueryKey::ad(42));
        service.ad(42).await.expect("refetch");
    }

    #[tokio::test]
    async fn list_page_is_parsed_from_wire_shape() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|path| path.starts_with("/ads?") && path.contains("limit=10"))
            .times(1)
            .returning(|_| {
                Ok(json!({
                    "ads": [{
                        "id": 1,
                        "title": "Шкаф",
                        "price": 12000,
                        "category": "Мебель",
                        "status": "pending",
                        "priority": "urgent"
                    }],
                    "pagination": {
                        "currentPage": 1,
                        "totalPages": 4,
                        "totalItems": 37,
                        "itemsPerPage": 10
                    }
                }))
            });
        let cache = Arc::new(MemoryQueryCache::new());
        let service = AdService::new(Arc::new(api), cache);

        let page = service.page(&ListQuery::default()).await.expect("page");
        assert_eq!(page.ads.len(), 1);
        assert_eq!(page.pagination.total_items, 37);
        assert_eq!(page.categories(), vec!["Мебель"]);
    }
}
