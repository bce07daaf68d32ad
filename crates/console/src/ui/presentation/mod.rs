//! Presentation layer: components, views, state and service wiring.

pub mod charts;
pub mod components;
pub mod format;
pub mod services;
pub mod shortcuts;
pub mod state;
pub mod views;

pub use services::{
    use_ad_service, use_cache_epoch, use_decision_service, use_preferences, use_services,
    use_stats_service, Services,
};
