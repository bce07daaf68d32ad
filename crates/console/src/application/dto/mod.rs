//! Data transfer objects shared between services and views.

pub mod filters;

pub use filters::{ListFilters, ListQuery, SortField, SortOrder, PAGE_SIZE};
