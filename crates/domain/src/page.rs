//! Paginated list responses from `GET /ads`.

use serde::{Deserialize, Serialize};

use crate::ad::AdSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

/// One page of the filtered ad list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPage {
    pub ads: Vec<AdSummary>,
    pub pagination: Pagination,
}

impl AdPage {
    /// Distinct categories present on this page, in first-seen order.
    /// Feeds the category filter dropdown.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for ad in &self.ads {
            if !seen.contains(&ad.category) {
                seen.push(ad.category.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::{AdPriority, AdStatus};

    fn summary(id: i64, category: &str) -> AdSummary {
        AdSummary {
            id,
            title: format!("Ad {id}"),
            price: 1000,
            category: category.to_string(),
            created_at: None,
            images: None,
            status: AdStatus::Pending,
            priority: AdPriority::Normal,
        }
    }

    #[test]
    fn categories_are_deduplicated_in_order() {
        let page = AdPage {
            ads: vec![
                summary(1, "Электроника"),
                summary(2, "Мебель"),
                summary(3, "Электроника"),
            ],
            pagination: Pagination {
                current_page: 1,
                total_pages: 1,
                total_items: 3,
                items_per_page: 10,
            },
        };
        assert_eq!(page.categories(), vec!["Электроника", "Мебель"]);
    }
}
