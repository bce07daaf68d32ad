//! Ad entity - a classified listing under moderation review.
//!
//! The full [`Ad`] is returned by the detail endpoint; the list endpoint
//! returns the lighter [`AdSummary`]. Descriptive fields are read-only from
//! the client's point of view; only `status` and `moderationHistory` are
//! ever mutated locally, and only through the decision workflow.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decision::{DecisionRecord, ModerationAction};
use crate::error::DomainError;

/// Review status of an ad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdStatus {
    Pending,
    Approved,
    Rejected,
    Draft,
}

impl AdStatus {
    /// Whether the given moderation action may be triggered from this status.
    ///
    /// Approve and reject are suppressed when the ad already holds the
    /// action's outcome; request-changes is always available.
    pub fn permits(self, action: ModerationAction) -> bool {
        match action {
            ModerationAction::Approved => self != AdStatus::Approved,
            ModerationAction::Rejected => self != AdStatus::Rejected,
            ModerationAction::RequestChanges => true,
        }
    }

    /// Wire representation of the status (`pending`, `approved`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            AdStatus::Pending => "pending",
            AdStatus::Approved => "approved",
            AdStatus::Rejected => "rejected",
            AdStatus::Draft => "draft",
        }
    }
}

impl FromStr for AdStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AdStatus::Pending),
            "approved" => Ok(AdStatus::Approved),
            "rejected" => Ok(AdStatus::Rejected),
            "draft" => Ok(AdStatus::Draft),
            other => Err(DomainError::parse(format!("unknown ad status: {other}"))),
        }
    }
}

/// Listing priority; informational only, never mutated by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdPriority {
    Normal,
    Urgent,
}

/// Seller info attached to the full ad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: String,
    pub rating: String,
    pub total_ads: u32,
    pub registered_at: DateTime<Utc>,
}

/// Full ad as returned by `GET /ads/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub status: AdStatus,
    pub priority: AdPriority,
    pub seller: Seller,
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
    /// Newest-first, prepend-only moderation log
    pub moderation_history: Vec<DecisionRecord>,
}

impl Ad {
    pub fn can_approve(&self) -> bool {
        self.status.permits(ModerationAction::Approved)
    }

    pub fn can_reject(&self) -> bool {
        self.status.permits(ModerationAction::Rejected)
    }

    pub fn can_request_changes(&self) -> bool {
        self.status.permits(ModerationAction::RequestChanges)
    }
}

/// List-view projection of an ad, as returned by `GET /ads`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSummary {
    pub id: i64,
    pub title: String,
    pub price: i64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub status: AdStatus,
    pub priority: AdPriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&AdStatus::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");
        let parsed: AdStatus = serde_json::from_str("\"draft\"").expect("deserialize");
        assert_eq!(parsed, AdStatus::Draft);
    }

    #[test]
    fn status_round_trips_through_from_str() {
        for status in [
            AdStatus::Pending,
            AdStatus::Approved,
            AdStatus::Rejected,
            AdStatus::Draft,
        ] {
            assert_eq!(status.as_str().parse::<AdStatus>(), Ok(status));
        }
        assert!("published".parse::<AdStatus>().is_err());
    }

    #[test]
    fn eligibility_follows_current_status() {
        assert!(!AdStatus::Approved.permits(ModerationAction::Approved));
        assert!(AdStatus::Approved.permits(ModerationAction::Rejected));
        assert!(!AdStatus::Rejected.permits(ModerationAction::Rejected));
        // Request-changes is always available, even from pending.
        assert!(AdStatus::Pending.permits(ModerationAction::RequestChanges));
        assert!(AdStatus::Draft.permits(ModerationAction::RequestChanges));
    }

    #[test]
    fn summary_parses_camel_case_wire_format() {
        let json = r#"{
            "id": 7,
            "title": "iPhone 14",
            "price": 65000,
            "category": "Электроника",
            "createdAt": "2025-11-02T10:00:00Z",
            "status": "pending",
            "priority": "urgent"
        }"#;
        let summary: AdSummary = serde_json::from_str(json).expect("deserialize");
        assert_eq!(summary.id, 7);
        assert_eq!(summary.priority, AdPriority::Urgent);
        assert!(summary.images.is_none());
    }
}
