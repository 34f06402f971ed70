//! Frontend Models
//!
//! Data structures matching the shapes the GearCrate backend returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inventory item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub notes: Option<String>,
    /// Small thumbnail, used in search rows
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Medium image, used in grid tiles
    #[serde(default)]
    pub thumb_url: Option<String>,
    /// Original image, used in the detail modal
    #[serde(default)]
    pub full_url: Option<String>,
    /// Remote source of the image
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Item {
    /// Best image for the modal: the original, else the medium one
    pub fn modal_image(&self) -> Option<&str> {
        self.full_url.as_deref().or(self.thumb_url.as_deref())
    }

    pub fn matches_filter(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty() || self.name.to_lowercase().contains(&needle)
    }
}

/// Aggregate counters (matches backend `get_stats`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_items_in_db: u64,
    #[serde(default)]
    pub inventory_unique_items: u64,
    #[serde(default)]
    pub total_item_count: u64,
    #[serde(default)]
    pub cache_size_mb: f64,
    #[serde(default)]
    pub category_counts: BTreeMap<String, u64>,
}

impl Stats {
    /// Categories with a positive count, alphabetical
    pub fn category_rows(&self) -> Vec<(String, u64)> {
        self.category_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| (name.clone(), *count))
            .collect()
    }
}

/// A match from the online CStone search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineResult {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `add_item`
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub item: Option<Item>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sort field for the inventory grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Count,
    Date,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Count, SortField::Date];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Count => "count",
            SortField::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parameters of the `get_inventory_items` request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryQuery {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub category_filter: Option<String>,
}

impl InventoryQuery {
    /// Query-string pairs; the category is omitted when unset
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("sort_by", self.sort_by.as_str().to_string()),
            ("sort_order", self.sort_order.as_str().to_string()),
        ];
        if let Some(category) = self.category_filter.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category_filter", category.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_backend_row() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Ether",
            "item_type": "Medical",
            "count": 3,
            "image_path": "/data/cache/images/Medical/abc.png",
            "thumb_url": "/cache/Medical/abc_medium.png",
            "full_url": "/cache/Medical/abc.png"
        });
        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item.name, "Ether");
        assert_eq!(item.count, 3);
        assert_eq!(item.notes, None);
        assert_eq!(item.modal_image(), Some("/cache/Medical/abc.png"));
    }

    #[test]
    fn test_modal_image_falls_back_to_thumb() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "name": "Helmet",
            "thumb_url": "/cache/Helmets/h_medium.png"
        }))
        .unwrap();
        assert_eq!(item.count, 0);
        assert_eq!(item.modal_image(), Some("/cache/Helmets/h_medium.png"));
    }

    #[test]
    fn test_matches_filter_is_case_insensitive() {
        let item: Item = serde_json::from_value(serde_json::json!({ "name": "Pembroke Helmet" })).unwrap();
        assert!(item.matches_filter("  helm "));
        assert!(item.matches_filter(""));
        assert!(!item.matches_filter("armor"));
    }

    #[test]
    fn test_stats_category_rows_skip_empty() {
        let stats: Stats = serde_json::from_value(serde_json::json!({
            "total_items_in_db": 120,
            "inventory_unique_items": 4,
            "total_item_count": 9,
            "cache_size_mb": 12.5,
            "category_counts": { "Undersuits": 0, "Helmets": 2, "Arms": 7 }
        }))
        .unwrap();
        assert_eq!(
            stats.category_rows(),
            vec![("Arms".to_string(), 7), ("Helmets".to_string(), 2)]
        );
    }

    #[test]
    fn test_inventory_query_pairs() {
        let query = InventoryQuery::default();
        assert_eq!(
            query.pairs(),
            vec![("sort_by", "name".to_string()), ("sort_order", "asc".to_string())]
        );

        let query = InventoryQuery {
            sort_by: SortField::Count,
            sort_order: SortOrder::Asc.toggled(),
            category_filter: Some("Helmets".to_string()),
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("sort_by", "count".to_string()),
                ("sort_order", "desc".to_string()),
                ("category_filter", "Helmets".to_string()),
            ]
        );
    }
}
