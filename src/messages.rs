//! UI Messages
//!
//! User-visible text. Parameterized messages are plain functions.

pub const APP_TITLE: &str = "GearCrate";

pub const SEARCH_PLACEHOLDER: &str = "Search items...";
pub const SEARCH_NO_RESULTS: &str = "No items found";
pub const SEARCH_ERROR: &str = "Search failed";
pub const SEARCH_ONLINE: &str = "Search CStone online";
pub const SEARCH_ONLINE_EMPTY: &str = "No online matches";
pub const SEARCH_LIMIT_LABEL: &str = "Results:";
pub const SEARCH_LIMIT_RESET: &str = "Search limit reset to 25";

pub const FILTER_PLACEHOLDER: &str = "Filter inventory...";
pub const SORT_NAME: &str = "🔤 Name";
pub const SORT_COUNT: &str = "🔢 Count";
pub const SORT_DATE: &str = "📅 Date";
pub const SORT_ASCENDING: &str = "⬇️ Ascending";
pub const SORT_DESCENDING: &str = "⬆️ Descending";

pub const CATEGORY_ALL: &str = "📦 All";
pub const CATEGORY_LOAD_ERROR: &str = "Could not load categories";

pub const INVENTORY_EMPTY: &str = "No items in inventory";
pub const INVENTORY_LOAD_ERROR: &str = "Could not load inventory";

pub const ADD_TO_INVENTORY: &str = "Add to inventory";
pub const ERROR_ADDING: &str = "Error adding item";
pub const ERROR_UPDATING: &str = "Error updating count";
pub const ERROR_AUTO_SAVE: &str = "Auto-save failed";
pub const ERROR_DELETING: &str = "Error deleting item";

pub const MODAL_COUNT: &str = "Count";
pub const MODAL_NOTES: &str = "Notes";
pub const MODAL_NOTES_PLACEHOLDER: &str = "Notes are saved automatically...";
pub const MODAL_DELETE: &str = "🗑️ Delete item";

pub const STATS_TITLE: &str = "Statistics";
pub const STATS_TOTAL_DB: &str = "Items in database";
pub const STATS_UNIQUE: &str = "Unique items owned";
pub const STATS_TOTAL_COUNT: &str = "Total count";
pub const STATS_CACHE: &str = "Image cache";
pub const STATS_BY_CATEGORY: &str = "By category";

pub const MAINTENANCE_TITLE: &str = "Maintenance";
pub const CLEAR_INVENTORY: &str = "Clear inventory";
pub const DELETE_ALL_ITEMS: &str = "Delete all items";
pub const CLEAR_CACHE: &str = "Clear image cache";
pub const CONFIRM_PROMPT: &str = "Sure?";

pub fn showing_results(shown: usize, total: usize) -> String {
    format!("Showing {} of {} results", shown, total)
}

pub fn item_added(name: &str) -> String {
    format!("'{}' added to inventory", name)
}

pub fn adding_failed(error: &str) -> String {
    format!("{}: {}", ERROR_ADDING, error)
}

pub fn confirm_zero(name: &str) -> String {
    format!("Set the count of '{}' to 0? It will leave the inventory.", name)
}

pub fn confirm_delete(name: &str) -> String {
    format!("Delete '{}' permanently?", name)
}

pub fn category_empty(category: &str) -> String {
    format!("No items in category {}", category)
}

pub fn maintenance_done(action: &str) -> String {
    format!("{}: done", action)
}

pub fn maintenance_failed(action: &str, error: &str) -> String {
    format!("{} failed: {}", action, error)
}

pub fn count_label(count: u32) -> String {
    format!("{}x", count)
}

pub fn cache_size(mb: f64) -> String {
    format!("{} MB", mb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_results() {
        assert_eq!(showing_results(25, 40), "Showing 25 of 40 results");
    }

    #[test]
    fn test_counts_and_sizes() {
        assert_eq!(count_label(0), "0x");
        assert_eq!(count_label(12), "12x");
        assert_eq!(cache_size(12.5), "12.5 MB");
        assert_eq!(cache_size(0.0), "0 MB");
    }

    #[test]
    fn test_parameterized_messages() {
        assert_eq!(adding_failed("Item exists"), "Error adding item: Item exists");
        assert_eq!(category_empty("Helmets"), "No items in category Helmets");
        assert!(confirm_delete("Ether").contains("'Ether'"));
    }
}
