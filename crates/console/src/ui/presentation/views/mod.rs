//! Top-level views, one per route

mod item;
mod list;
mod stats;

pub use item::ItemView;
pub use list::ListView;
pub use stats::StatsView;
