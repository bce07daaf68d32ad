//! Decision Service - the moderation write path
//!
//! Implements the optimistic decision workflow: cancel in-flight reads for
//! the ad, snapshot the cached entry, apply the expected outcome locally,
//! fire the decision endpoint, and either keep the optimistic state or
//! restore the snapshot byte-for-byte when the call fails. Either way the
//! affected keys are invalidated afterwards so the next render refetches
//! server truth.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::application::ServiceError;
use crate::ports::outbound::{PlatformPort, QueryCachePort, QueryKey, RawApiPort};
use modera_domain::{DecisionPayload, DecisionRecord, ModerationAction};

/// Label shown for decisions made in this session, before the server
/// replaces the provisional record with its own
const OPTIMISTIC_MODERATOR: &str = "Вы";

/// Canned reasons offered in the reject / request-changes dialogs
pub const REASON_PRESETS: [&str; 6] = [
    "Запрещенный товар",
    "Неверная категория",
    "Некорректное описание",
    "Проблемы с фото",
    "Подозрение на мошенничество",
    "Другое",
];

/// Lifecycle of one decision submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionPhase {
    Idle,
    Applying,
    SettledSuccess,
    SettledFailureRolledBack,
}

impl DecisionPhase {
    fn as_str(self) -> &'static str {
        match self {
            DecisionPhase::Idle => "idle",
            DecisionPhase::Applying => "applying",
            DecisionPhase::SettledSuccess => "settled_success",
            DecisionPhase::SettledFailureRolledBack => "settled_failure_rolled_back",
        }
    }
}

pub struct DecisionService {
    api: Arc<dyn RawApiPort>,
    cache: Arc<dyn QueryCachePort>,
    platform: Arc<dyn PlatformPort>,
}

impl DecisionService {
    pub fn new(
        api: Arc<dyn RawApiPort>,
        cache: Arc<dyn QueryCachePort>,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        Self {
            api,
            cache,
            platform,
        }
    }

    /// Submit a moderation decision for the given ad.
    ///
    /// Preconditions fail before anything is touched: reject and
    /// request-changes need a non-empty reason, and the ad must already be
    /// in the cache (the detail view loaded it). On remote failure the
    /// snapshot is restored first and the API error is then returned.
    pub async fn submit(
        &self,
        ad_id: i64,
        action: ModerationAction,
        payload: Option<DecisionPayload>,
    ) -> Result<DecisionPhase, ServiceError> {
        let payload = match (action.requires_reason(), payload) {
            (true, Some(p)) => {
                p.validate()?;
                Some(p)
            }
            (true, None) => {
                return Err(modera_domain::DomainError::validation(
                    "decision reason is required",
                )
                .into())
            }
            (false, _) => None,
        };

        let key = QueryKey::ad(ad_id);
        // Refuse any read that is still in flight; its response must not
        // overwrite the optimistic state we are about to install.
        self.cache.cancel(&key);
        let snapshot = self
            .cache
            .get(&key)
            .ok_or(ServiceError::NotLoaded(ad_id))?;

        let now_ms = self.platform.now_millis();
        let optimistic = apply_optimistic(&snapshot, action, payload.as_ref(), now_ms)?;
        self.cache.set(&key, optimistic);
        let phase = DecisionPhase::Applying;
        tracing::debug!(ad_id, phase = phase.as_str(), "optimistic decision applied");

        let path = format!("/ads/{}/{}", ad_id, action.endpoint_segment());
        let result = match &payload {
            Some(p) => {
                let body = serde_json::to_value(p)
                    .map_err(|e| ServiceError::ParseError(e.to_string()))?;
                self.api.post_json(&path, &body).await.map(|_| ())
            }
            None => self.api.post_empty(&path).await,
        };

        match result {
            Ok(()) => {
                let phase = DecisionPhase::SettledSuccess;
                tracing::info!(ad_id, phase = phase.as_str(), "decision confirmed by server");
                self.invalidate_after_settlement(&key);
                Ok(phase)
            }
            Err(e) => {
                // Restore the exact pre-decision bytes, then let the next
                // render refetch server truth.
                self.cache.set(&key, snapshot);
                let phase = DecisionPhase::SettledFailureRolledBack;
                tracing::warn!(
                    ad_id,
                    phase = phase.as_str(),
                    error = %e,
                    "decision failed, snapshot restored"
                );
                self.invalidate_after_settlement(&key);
                Err(e.into())
            }
        }
    }

    fn invalidate_after_settlement(&self, ad_key: &QueryKey) {
        self.cache.invalidate(ad_key);
        self.cache.invalidate(&QueryKey::ads());
    }
}

/// Build the optimistic ad state from the cached raw value.
///
/// Works on the raw JSON rather than the typed [`modera_domain::Ad`] so
/// fields this client does not know about survive the round trip, and the
/// snapshot restore stays byte-identical.
fn apply_optimistic(
    snapshot: &Value,
    action: ModerationAction,
    payload: Option<&DecisionPayload>,
    now_ms: u64,
) -> Result<Value, ServiceError> {
    let mut ad = snapshot.clone();
    let obj = ad
        .as_object_mut()
        .ok_or_else(|| ServiceError::ParseError("cached ad is not an object".to_string()))?;

    obj.insert(
        "status".to_string(),
        json!(action.resulting_status().as_str()),
    );

    let timestamp: DateTime<Utc> =
        DateTime::from_timestamp_millis(now_ms as i64).unwrap_or_else(Utc::now);
    let record = DecisionRecord {
        // Provisional id; the server assigns the real one.
        id: now_ms as i64,
        moderator_name: OPTIMISTIC_MODERATOR.to_string(),
        action,
        reason: payload.map(|p| p.reason.clone()),
        comment: payload.and_then(|p| p.comment.clone()),
        timestamp,
    };
    let record = serde_json::to_value(&record)
        .map_err(|e| ServiceError::ParseError(e.to_string()))?;

    let history = obj
        .entry("moderationHistory".to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    let entries = history
        .as_array_mut()
        .ok_or_else(|| ServiceError::ParseError("moderationHistory is not an array".to_string()))?;
    entries.insert(0, record);

    Ok(ad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::query_cache::MemoryQueryCache;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic platform: the clock advances one second per call.
    struct TestPlatform {
        now_ms: AtomicU64,
    }

    impl TestPlatform {
        fn new(start_ms: u64) -> Self {
            Self {
                now_ms: AtomicU64::new(start_ms),
            }
        }
    }

    impl PlatformPort for TestPlatform {
        fn now_unix_secs(&self) -> u64 {
            self.now_ms.load(Ordering::SeqCst) / 1000
        }
        fn now_millis(&self) -> u64 {
            self.now_ms.fetch_add(1000, Ordering::SeqCst)
        }
        fn storage_save(&self, _key: &str, _value: &str) {}
        fn storage_load(&self, _key: &str) -> Option<String> {
            None
        }
        fn storage_remove(&self, _key: &str) {}
        fn log_info(&self, _msg: &str) {}
        fn log_error(&self, _msg: &str) {}
        fn log_debug(&self, _msg: &str) {}
        fn log_warn(&self, _msg: &str) {}
        fn set_page_title(&self, _title: &str) {}
    }

    fn pending_ad(id: i64) -> Value {
        json!({
            "id": id,
            "title": "iPhone 14",
            "description": "Новый, в коробке",
            "price": 65000,
            "category": "Электроника",
            "status": "pending",
            "priority": "urgent",
            "seller": {
                "name": "Иван",
                "rating": "4.8",
                "totalAds": 12,
                "registeredAt": "2024-01-10T00:00:00Z"
            },
            "serverOnlyField": "must survive rollback",
            "moderationHistory": []
        })
    }

    fn service(
        api: MockRawApiPort,
        cache: Arc<MemoryQueryCache>,
    ) -> DecisionService {
        DecisionService::new(
            Arc::new(api),
            cache,
            Arc::new(TestPlatform::new(1_700_000_000_000)),
        )
    }

    #[tokio::test]
    async fn rejecting_ad_42_applies_optimistically_and_invalidates() {
        let key = QueryKey::ad(42);
        let cache = Arc::new(MemoryQueryCache::new());
        cache.set(&key, pending_ad(42));
        let list_key = QueryKey::ads().child("page-1");
        cache.set(&list_key, json!({"ads": []}));

        let mut api = MockRawApiPort::new();
        api.expect_post_json()
            .withf(|path, body| {
                path == "/ads/42/reject"
                    && body["reason"] == "Запрещенный товар"
                    && body.get("comment").is_none()
            })
            .times(1)
            .returning(|_, _| Ok(json!({"ok": true})));
        let service = service(api, cache.clone());

        let phase = service
            .submit(
                42,
                ModerationAction::Rejected,
                Some(DecisionPayload::new("Запрещенный товар", None)),
            )
            .await
            .expect("submit");
        assert_eq!(phase, DecisionPhase::SettledSuccess);

        let cached = cache.get(&key).expect("cached ad");
        assert_eq!(cached["status"], "rejected");
        let newest = &cached["moderationHistory"][0];
        assert_eq!(newest["moderatorName"], "Вы");
        assert_eq!(newest["action"], "rejected");
        assert_eq!(newest["reason"], "Запрещенный товар");
        assert_eq!(newest["comment"], Value::Null);
        // Both the ad and every cached list page need a refetch now.
        assert!(cache.is_stale(&key));
        assert!(cache.is_stale(&list_key));
    }

    #[tokio::test]
    async fn failed_call_restores_the_snapshot_bit_for_bit() {
        let key = QueryKey::ad(42);
        let cache = Arc::new(MemoryQueryCache::new());
        let snapshot = pending_ad(42);
        cache.set(&key, snapshot.clone());

        let mut api = MockRawApiPort::new();
        api.expect_post_json().times(1).returning(|_, _| {
            Err(ApiError::Status {
                status: 500,
                message: "internal error".to_string(),
            })
        });
        let service = service(api, cache.clone());

        let result = service
            .submit(
                42,
                ModerationAction::Rejected,
                Some(DecisionPayload::new("Другое", None)),
            )
            .await;
        assert!(matches!(result, Err(ServiceError::Api(_))));
        // Unknown server fields included, the cache holds the exact
        // pre-decision value again.
        assert_eq!(cache.get(&key), Some(snapshot));
        assert!(cache.is_stale(&key));
    }

    #[tokio::test]
    async fn approve_needs_no_payload_and_hits_the_empty_endpoint() {
        let key = QueryKey::ad(7);
        let cache = Arc::new(MemoryQueryCache::new());
        cache.set(&key, pending_ad(7));

        let mut api = MockRawApiPort::new();
        api.expect_post_empty()
            .withf(|path| path == "/ads/7/approve")
            .times(1)
            .returning(|_| Ok(()));
        let service = service(api, cache.clone());

        let phase = service
            .submit(7, ModerationAction::Approved, None)
            .await
            .expect("submit");
        assert_eq!(phase, DecisionPhase::SettledSuccess);
        let cached = cache.get(&key).expect("cached ad");
        assert_eq!(cached["status"], "approved");
        assert_eq!(cached["moderationHistory"][0]["reason"], Value::Null);
    }

    #[tokio::test]
    async fn missing_reason_fails_before_any_side_effect() {
        let key = QueryKey::ad(7);
        let cache = Arc::new(MemoryQueryCache::new());
        cache.set(&key, pending_ad(7));
        let before = cache.get(&key);

        // No expectations: the API must never be called.
        let api = MockRawApiPort::new();
        let service = service(api, cache.clone());

        let result = service.submit(7, ModerationAction::Rejected, None).await;
        assert!(matches!(result, Err(ServiceError::Domain(_))));
        let result = service
            .submit(
                7,
                ModerationAction::RequestChanges,
                Some(DecisionPayload::new("   ", None)),
            )
            .await;
        assert!(matches!(result, Err(ServiceError::Domain(_))));
        assert_eq!(cache.get(&key), before);
        assert!(!cache.is_stale(&key));
    }

    #[tokio::test]
    async fn unloaded_ad_is_refused() {
        let api = MockRawApiPort::new();
        let cache = Arc::new(MemoryQueryCache::new());
        let service = service(api, cache);

        let result = service.submit(99, ModerationAction::Approved, None).await;
        assert!(matches!(result, Err(ServiceError::NotLoaded(99))));
    }

    #[tokio::test]
    async fn repeated_decisions_prepend_newest_first() {
        let key = QueryKey::ad(42);
        let cache = Arc::new(MemoryQueryCache::new());
        cache.set(&key, pending_ad(42));

        let mut api = MockRawApiPort::new();
        api.expect_post_json().times(2).returning(|_, _| Ok(json!({})));
        let service = service(api, cache.clone());

        for reason in ["Проблемы с фото", "Некорректное описание"] {
            service
                .submit(
                    42,
                    ModerationAction::RequestChanges,
                    Some(DecisionPayload::new(reason, None)),
                )
                .await
                .expect("submit");
        }

        let cached = cache.get(&key).expect("cached ad");
        let history = cached["moderationHistory"].as_array().expect("history");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["reason"], "Некорректное описание");
        assert_eq!(history[1]["reason"], "Проблемы с фото");
        let newest = history[0]["timestamp"].as_str().expect("timestamp");
        let oldest = history[1]["timestamp"].as_str().expect("timestamp");
        assert!(newest > oldest);
    }

    #[tokio::test]
    async fn decision_cancels_the_in_flight_detail_read() {
        let key = QueryKey::ad(42);
        let cache = Arc::new(MemoryQueryCache::new());
        cache.set(&key, pending_ad(42));

        // A read began before the decision.
        let stale_ticket = cache.begin_fetch(&key);

        let mut api = MockRawApiPort::new();
        api.expect_post_empty().times(1).returning(|_| Ok(()));
        let service = service(api, cache.clone());
        service
            .submit(42, ModerationAction::Approved, None)
            .await
            .expect("submit");

        // The late response must not overwrite the optimistic state.
        assert!(!cache.try_commit(&stale_ticket, pending_ad(42)));
        let cached = cache.get(&key).expect("cached ad");
        assert_eq!(cached["status"], "approved");
    }
}
