//! Moderation decisions and their history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ad::AdStatus;
use crate::error::DomainError;

/// One of the three moderation verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModerationAction {
    Approved,
    Rejected,
    RequestChanges,
}

impl ModerationAction {
    /// The ad status this action optimistically transitions to.
    ///
    /// Request-changes sends the ad back to the review queue, hence pending.
    pub fn resulting_status(self) -> AdStatus {
        match self {
            ModerationAction::Approved => AdStatus::Approved,
            ModerationAction::Rejected => AdStatus::Rejected,
            ModerationAction::RequestChanges => AdStatus::Pending,
        }
    }

    /// Whether this action requires a non-empty reason before submission
    pub fn requires_reason(self) -> bool {
        !matches!(self, ModerationAction::Approved)
    }

    /// Decision endpoint path segment for this action
    pub fn endpoint_segment(self) -> &'static str {
        match self {
            ModerationAction::Approved => "approve",
            ModerationAction::Rejected => "reject",
            ModerationAction::RequestChanges => "request-changes",
        }
    }
}

/// One logged moderation event, as carried in `moderationHistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    /// Server-assigned id; provisional (epoch millis) while optimistic
    pub id: i64,
    pub moderator_name: String,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Body of a reject / request-changes call: `{ reason, comment? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPayload {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DecisionPayload {
    pub fn new(reason: impl Into<String>, comment: Option<String>) -> Self {
        // Empty comments collapse to absent, matching the original client.
        let comment = comment.filter(|c| !c.is_empty());
        Self {
            reason: reason.into(),
            comment,
        }
    }

    /// Client-side precondition: the reason must be non-empty before a
    /// reject / request-changes call reaches the network.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reason.trim().is_empty() {
            return Err(DomainError::validation("decision reason cannot be empty"));
        }
        Ok(())
    }
}

/// Per-ad counts derived from a moderation history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionTally {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub request_changes: usize,
    /// Timestamp of the newest record, if any
    pub last_change: Option<DateTime<Utc>>,
}

impl DecisionTally {
    /// Tally a newest-first history slice.
    pub fn from_history(history: &[DecisionRecord]) -> Self {
        let mut tally = Self {
            total: history.len(),
            last_change: history.first().map(|r| r.timestamp),
            ..Self::default()
        };
        for record in history {
            match record.action {
                ModerationAction::Approved => tally.approved += 1,
                ModerationAction::Rejected => tally.rejected += 1,
                ModerationAction::RequestChanges => tally.request_changes += 1,
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(action: ModerationAction, ts_secs: i64) -> DecisionRecord {
        DecisionRecord {
            id: ts_secs,
            moderator_name: "Вы".to_string(),
            action,
            reason: action.requires_reason().then(|| "Другое".to_string()),
            comment: None,
            timestamp: Utc.timestamp_opt(ts_secs, 0).single().expect("timestamp"),
        }
    }

    #[test]
    fn action_wire_names_match_service() {
        assert_eq!(
            serde_json::to_string(&ModerationAction::RequestChanges).expect("serialize"),
            "\"requestChanges\""
        );
        assert_eq!(
            serde_json::to_string(&ModerationAction::Approved).expect("serialize"),
            "\"approved\""
        );
    }

    #[test]
    fn resulting_status_for_request_changes_is_pending() {
        assert_eq!(
            ModerationAction::RequestChanges.resulting_status(),
            AdStatus::Pending
        );
    }

    #[test]
    fn empty_reason_fails_validation() {
        let payload = DecisionPayload::new("   ", None);
        assert!(payload.validate().is_err());
        let payload = DecisionPayload::new("Проблемы с фото", None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn empty_comment_collapses_to_none() {
        let payload = DecisionPayload::new("Другое", Some(String::new()));
        assert_eq!(payload.comment, None);
        let json = serde_json::to_string(&payload).expect("serialize");
        assert!(!json.contains("comment"));
    }

    #[test]
    fn tally_counts_actions_and_tracks_newest() {
        let history = vec![
            record(ModerationAction::Rejected, 300),
            record(ModerationAction::Approved, 200),
            record(ModerationAction::RequestChanges, 100),
        ];
        let tally = DecisionTally::from_history(&history);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.approved, 1);
        assert_eq!(tally.rejected, 1);
        assert_eq!(tally.request_changes, 1);
        assert_eq!(
            tally.last_change,
            Some(Utc.timestamp_opt(300, 0).single().expect("timestamp"))
        );
    }
}
