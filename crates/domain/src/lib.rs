//! Modera Domain - core types for the ad moderation console.
//!
//! Pure data types shared between the application and presentation layers:
//! ad listings, moderation decisions, pagination, and statistics aggregates.
//! All wire formats are the remote ad service's camelCase JSON.

pub mod ad;
pub mod decision;
pub mod error;
pub mod page;
pub mod stats;

pub use ad::{Ad, AdPriority, AdStatus, AdSummary, Seller};
pub use decision::{DecisionPayload, DecisionRecord, DecisionTally, ModerationAction};
pub use error::DomainError;
pub use page::{AdPage, Pagination};
pub use stats::{ActivityPoint, CategoryCounts, DecisionBreakdown, StatsSummary};
