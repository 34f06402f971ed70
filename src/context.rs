//! Application Context
//!
//! The view-state store plus the non-reactive session state next to it:
//! search cache, debounce timers and the inputs that can regain focus.

use leptos::html;
use leptos::prelude::*;

use crate::config::{
    COUNT_SAVE_DELAY_MS, NOTES_SAVE_DELAY_MS, NOTIFICATION_MS, SEARCH_DEBOUNCE_MS, STATS_REFRESH_DELAY_MS,
};
use crate::debounce::Debouncer;
use crate::search::SearchSession;
use crate::store::{AppStore, ViewStateStoreFields};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Search results by query, cleared on every mutation
    pub search: StoredValue<SearchSession>,
    pub search_input: NodeRef<html::Input>,
    pub filter_input: NodeRef<html::Input>,
    pub search_debounce: Debouncer,
    pub stats_refresh: Debouncer,
    /// Modal auto-save timers; app-lived so closing the modal keeps a pending save
    pub count_save: Debouncer,
    pub notes_save: Debouncer,
    notice_timer: Debouncer,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            search: StoredValue::new(SearchSession::default()),
            search_input: NodeRef::new(),
            filter_input: NodeRef::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE_MS),
            stats_refresh: Debouncer::new(STATS_REFRESH_DELAY_MS),
            count_save: Debouncer::new(COUNT_SAVE_DELAY_MS),
            notes_save: Debouncer::new(NOTES_SAVE_DELAY_MS),
            notice_timer: Debouncer::new(NOTIFICATION_MS),
        }
    }

    /// Drop all cached search results
    pub fn invalidate_search(&self) {
        self.search.update_value(|session| {
            if !session.is_empty() {
                log::debug!("[Search] Cache cleared");
            }
            session.invalidate();
        });
    }

    /// Show a short-lived notification, replacing the current one
    pub fn notify(&self, message: impl Into<String>) {
        let store = self.store;
        store.notice().set(Some(message.into()));
        self.notice_timer.schedule(move || store.notice().set(None));
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
