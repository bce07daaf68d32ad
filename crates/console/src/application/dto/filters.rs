//! List filter state and its three serialized forms.
//!
//! The same [`ListQuery`] value is (1) round-tripped through the address bar
//! (defaults omitted, so clean URLs stay clean), (2) marshalled into the
//! `GET /ads` query string (defaults explicit, `status[]` repeated), and
//! (3) flattened into a cache key so each filter combination caches its
//! pages independently.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::ports::outbound::QueryKey;
use modera_domain::AdStatus;

/// Page size fixed by the list endpoint contract
pub const PAGE_SIZE: u32 = 10;

/// Sort key accepted by `GET /ads`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Price,
    Priority,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
            SortField::Priority => "priority",
        }
    }

    /// Tolerant parse; unknown values fall back to the default sort
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => SortField::Price,
            "priority" => SortField::Priority,
            _ => SortField::CreatedAt,
        }
    }
}

/// Sort direction accepted by `GET /ads`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Everything the moderator can filter and sort the list by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: String,
    pub status: Vec<AdStatus>,
    pub category: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

/// Filter state plus the current page; the full address-bar state of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: ListFilters,
    pub page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: ListFilters::default(),
            page: 1,
        }
    }
}

impl ListQuery {
    /// The canonical "no filters" state. Applying it twice changes nothing.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Apply a new filter draft; any filter change restarts at page one.
    pub fn with_filters(filters: ListFilters) -> Self {
        Self { filters, page: 1 }
    }

    /// Parse the address-bar query string. Missing keys mean defaults;
    /// unknown keys and unparsable values are ignored.
    pub fn from_query_str(query: &str) -> Self {
        let mut out = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => out.filters.search = value.into_owned(),
                "status" => {
                    out.filters.status = value
                        .split(',')
                        .filter_map(|s| s.parse::<AdStatus>().ok())
                        .collect();
                }
                "category" => out.filters.category = value.into_owned(),
                "minPrice" => out.filters.min_price = value.parse().ok(),
                "maxPrice" => out.filters.max_price = value.parse().ok(),
                "sortBy" => out.filters.sort_by = SortField::parse(&value),
                "sortOrder" => out.filters.sort_order = SortOrder::parse(&value),
                "page" => out.page = value.parse().unwrap_or(1).max(1),
                _ => {}
            }
        }
        out
    }

    /// Query string for `GET /ads`. Unlike the address bar form, the API
    /// form always carries sort, page and limit, and repeats `status[]`.
    pub fn api_path(&self) -> String {
        let f = &self.filters;
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !f.search.is_empty() {
            ser.append_pair("search", &f.search);
        }
        for status in &f.status {
            ser.append_pair("status[]", status.as_str());
        }
        if !f.category.is_empty() {
            ser.append_pair("category", &f.category);
        }
        if let Some(min) = f.min_price {
            ser.append_pair("minPrice", &min.to_string());
        }
        if let Some(max) = f.max_price {
            ser.append_pair("maxPrice", &max.to_string());
        }
        ser.append_pair("sortBy", f.sort_by.as_str());
        ser.append_pair("sortOrder", f.sort_order.as_str());
        ser.append_pair("page", &self.page.to_string());
        ser.append_pair("limit", &PAGE_SIZE.to_string());
        format!("/ads?{}", ser.finish())
    }

    /// Cache key for this exact filter + page combination.
    ///
    /// Rooted at [`QueryKey::ads`] so a single prefix invalidation covers
    /// every cached page.
    pub fn cache_key(&self) -> QueryKey {
        let f = &self.filters;
        let statuses = f
            .status
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("+");
        QueryKey::ads()
            .child(f.search.clone())
            .child(statuses)
            .child(f.category.clone())
            .child(f.min_price.map(|v| v.to_string()).unwrap_or_default())
            .child(f.max_price.map(|v| v.to_string()).unwrap_or_default())
            .child(f.sort_by.as_str())
            .child(f.sort_order.as_str())
            .child(self.page.to_string())
    }
}

/// Address-bar form: only non-default fields appear, so the URL for the
/// default view is bare `/list`.
impl fmt::Display for ListQuery {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let f = &self.filters;
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !f.search.is_empty() {
            ser.append_pair("search", &f.search);
        }
        if !f.status.is_empty() {
            let statuses = f
                .status
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(",");
            ser.append_pair("status", &statuses);
        }
        if !f.category.is_empty() {
            ser.append_pair("category", &f.category);
        }
        if let Some(min) = f.min_price {
            ser.append_pair("minPrice", &min.to_string());
        }
        if let Some(max) = f.max_price {
            ser.append_pair("maxPrice", &max.to_string());
        }
        if f.sort_by != SortField::default() {
            ser.append_pair("sortBy", f.sort_by.as_str());
        }
        if f.sort_order != SortOrder::default() {
            ser.append_pair("sortOrder", f.sort_order.as_str());
        }
        if self.page > 1 {
            ser.append_pair("page", &self.page.to_string());
        }
        write!(out, "{}", ser.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_serializes_to_empty_string() {
        assert_eq!(ListQuery::default().to_string(), "");
    }

    #[test]
    fn address_state_round_trips_with_defaults_omitted() {
        let query = ListQuery {
            filters: ListFilters {
                search: "iphone".to_string(),
                status: vec![AdStatus::Pending, AdStatus::Approved],
                category: "Электроника".to_string(),
                min_price: Some(1000),
                max_price: None,
                sort_by: SortField::Price,
                sort_order: SortOrder::Asc,
            },
            page: 3,
        };
        let serialized = query.to_string();
        assert_eq!(ListQuery::from_query_str(&serialized), query);
        // Defaults never appear in the serialized form.
        let partial = ListQuery {
            filters: ListFilters {
                search: "шкаф".to_string(),
                ..ListFilters::default()
            },
            page: 1,
        };
        let serialized = partial.to_string();
        assert!(!serialized.contains("sortBy"));
        assert!(!serialized.contains("sortOrder"));
        assert!(!serialized.contains("page"));
        assert_eq!(ListQuery::from_query_str(&serialized), partial);
    }

    #[test]
    fn reset_is_idempotent() {
        let once = ListQuery::reset();
        let twice = ListQuery::from_query_str(&once.to_string());
        assert_eq!(once, twice);
        assert_eq!(twice, ListQuery::reset());
    }

    #[test]
    fn unknown_status_tokens_are_dropped() {
        let query = ListQuery::from_query_str("status=pending,published,draft");
        assert_eq!(
            query.filters.status,
            vec![AdStatus::Pending, AdStatus::Draft]
        );
    }

    #[test]
    fn api_path_repeats_status_and_pins_limit() {
        let query = ListQuery {
            filters: ListFilters {
                status: vec![AdStatus::Pending, AdStatus::Rejected],
                ..ListFilters::default()
            },
            page: 2,
        };
        let path = query.api_path();
        assert!(path.starts_with("/ads?"));
        assert!(path.contains("status%5B%5D=pending"));
        assert!(path.contains("status%5B%5D=rejected"));
        assert!(path.contains("sortBy=createdAt"));
        assert!(path.contains("sortOrder=desc"));
        assert!(path.contains("page=2"));
        assert!(path.contains("limit=10"));
    }

    #[test]
    fn filter_changes_produce_distinct_cache_keys() {
        let base = ListQuery::default();
        let searched = ListQuery {
            filters: ListFilters {
                search: "iphone".to_string(),
                ..ListFilters::default()
            },
            page: 1,
        };
        assert_ne!(base.cache_key(), searched.cache_key());
        assert!(base.cache_key().starts_with(&QueryKey::ads()));
        assert!(searched.cache_key().starts_with(&QueryKey::ads()));
    }

    #[test]
    fn with_filters_restarts_at_page_one() {
        let query = ListQuery::default().with_page(5);
        let filtered = ListQuery::with_filters(query.filters.clone());
        assert_eq!(filtered.page, 1);
    }
}
