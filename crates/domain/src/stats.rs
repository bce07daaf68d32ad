//! Read-only statistics aggregates from the `/stats` endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `GET /stats/summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_reviewed: u64,
    pub total_reviewed_today: u64,
    pub total_reviewed_this_week: u64,
    pub total_reviewed_this_month: u64,
}

/// One day of the `GET /stats/chart/activity` series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    pub date: String,
    pub approved: u64,
    pub rejected: u64,
    pub request_changes: u64,
}

/// `GET /stats/chart/decisions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionBreakdown {
    pub approved: u64,
    pub rejected: u64,
    pub request_changes: u64,
}

impl DecisionBreakdown {
    pub fn total(&self) -> u64 {
        self.approved + self.rejected + self.request_changes
    }
}

/// `GET /stats/chart/categories`: category name -> count, sorted by name
pub type CategoryCounts = BTreeMap<String, u64>;
