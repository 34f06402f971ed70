//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Everything the
//! page renders lives in one `ViewState`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::DEFAULT_SEARCH_LIMIT;
use crate::models::{InventoryQuery, Item, OnlineResult, Stats};
use crate::quick_update::FocusTarget;
use crate::search::SearchPage;

/// What the search results panel shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchView {
    #[default]
    Hidden,
    Results(SearchPage),
    NoResults,
    Error,
    /// Matches from the online search
    Online(Vec<OnlineResult>),
}

/// Item shown in the detail modal
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    pub item: Item,
    /// Set once the full record (notes, original image) has arrived
    pub refined: bool,
}

/// Text of one modal field while the user edits it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    /// Typed into since the item was opened
    pub edited: bool,
}

impl Draft {
    /// Another item was opened
    pub fn reset(&mut self, text: String) {
        self.text = text;
        self.edited = false;
    }

    /// The full record arrived; keep what the user already typed
    pub fn refine(&mut self, text: String) {
        if !self.edited {
            self.text = text;
        }
    }

    pub fn edit(&mut self, text: String) {
        self.text = text;
        self.edited = true;
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Global view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Inventory grid contents, as returned by the last load
    pub items: Vec<Item>,
    pub inventory_status: LoadStatus,
    /// Server-side sort and category filter
    pub query: InventoryQuery,
    /// Client-side name filter
    pub filter_text: String,
    pub categories: Vec<String>,
    pub categories_failed: bool,
    pub stats: Stats,
    pub search_text: String,
    pub search_limit: u32,
    pub search_view: SearchView,
    /// Online result selected for adding
    pub preview: Option<OnlineResult>,
    pub modal: Option<ModalState>,
    pub notice: Option<String>,
    /// Input the user last typed in
    pub last_focus: Option<FocusTarget>,
}

impl ViewState {
    pub fn new(search_limit: u32) -> Self {
        Self {
            search_limit: if search_limit == 0 { DEFAULT_SEARCH_LIMIT } else { search_limit },
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Set the count of the item with this name
pub fn patch_item_count(items: &mut [Item], name: &str, count: u32) -> bool {
    match items.iter_mut().find(|item| item.name == name) {
        Some(item) => {
            item.count = count;
            true
        }
        None => false,
    }
}

/// Patch a count everywhere it is displayed (grid tile, search row, modal)
pub fn store_patch_count(store: &AppStore, name: &str, count: u32) {
    patch_item_count(&mut store.items().write(), name, count);

    if let SearchView::Results(page) = &mut *store.search_view().write() {
        page.patch_count(name, count);
    }

    store.modal().update(|modal| {
        if let Some(modal) = modal.as_mut().filter(|m| m.item.name == name) {
            modal.item.count = count;
        }
    });
}

/// Replace the modal item with its full record, if it is still open
pub fn store_refine_modal(store: &AppStore, item: Item) {
    store.modal().update(|modal| {
        if let Some(modal) = modal.as_mut().filter(|m| m.item.name == item.name) {
            modal.item = item;
            modal.refined = true;
        }
    });
}

pub fn store_hide_search(store: &AppStore) {
    store.search_view().set(SearchView::Hidden);
    store.preview().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, count: u32) -> Item {
        Item {
            name: name.to_string(),
            item_type: Some("Helmets".to_string()),
            count,
            notes: None,
            icon_url: None,
            thumb_url: None,
            full_url: None,
            image_url: None,
        }
    }

    #[test]
    fn test_patch_item_count() {
        let mut items = vec![item("Pembroke Helmet", 1), item("Ether", 3)];
        assert!(patch_item_count(&mut items, "Ether", 4));
        assert_eq!(items[1].count, 4);
        assert_eq!(items[0].count, 1);
        assert!(!patch_item_count(&mut items, "Water", 1));
    }

    #[test]
    fn test_draft_keeps_typing_over_refine() {
        let mut notes = Draft::default();
        notes.reset(String::new());
        notes.edit("Need repair".to_string());
        notes.refine("From the database".to_string());
        assert_eq!(notes.text, "Need repair");

        let mut count = Draft::default();
        count.reset("2".to_string());
        count.refine("3".to_string());
        assert_eq!(count.text, "3");
    }

    #[test]
    fn test_draft_reset_clears_edited() {
        let mut notes = Draft::default();
        notes.edit("Need repair".to_string());
        notes.reset("Spare".to_string());
        assert!(!notes.edited);
        notes.refine("Spare, scratched".to_string());
        assert_eq!(notes.text, "Spare, scratched");
    }

    #[test]
    fn test_new_view_state() {
        let state = ViewState::new(50);
        assert_eq!(state.search_limit, 50);
        assert_eq!(state.search_view, SearchView::Hidden);
        assert_eq!(state.inventory_status, LoadStatus::Loading);
        assert_eq!(ViewState::new(0).search_limit, DEFAULT_SEARCH_LIMIT);
    }
}
