//! UI Actions
//!
//! Async flows behind user interactions: loading, searching, the quick
//! count update, modal auto-save, and bulk maintenance.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, AddItemArgs};
use crate::config;
use crate::context::AppContext;
use crate::dialog;
use crate::error::ApiError;
use crate::messages;
use crate::models::{Item, OnlineResult};
use crate::quick_update::{caret_end, CountChange, FocusTarget, Followup};
use crate::search::{normalize_query, SearchPage, SearchStep};
use crate::store::{store_hide_search, store_patch_count, store_refine_modal, LoadStatus, ModalState, SearchView, ViewStateStoreFields};

// ========================
// Loading
// ========================

pub async fn load_inventory(ctx: AppContext) {
    let query = ctx.store.query().get_untracked();
    match commands::get_inventory_items(&query).await {
        Ok(items) => {
            log::info!(
                "[Inventory] Loaded {} items ({} {})",
                items.len(),
                query.sort_by.as_str(),
                query.sort_order.as_str()
            );
            ctx.store.items().set(items);
            ctx.store.inventory_status().set(LoadStatus::Ready);
        }
        Err(e) => {
            log::error!("[Inventory] Error loading inventory: {}", e);
            ctx.store.inventory_status().set(LoadStatus::Failed);
        }
    }
}

pub async fn load_stats(ctx: AppContext) {
    match commands::get_stats().await {
        Ok(stats) => ctx.store.stats().set(stats),
        Err(e) => log::error!("[Stats] Error loading stats: {}", e),
    }
}

pub async fn load_categories(ctx: AppContext) {
    match commands::get_categories().await {
        Ok(categories) => {
            log::info!("[Categories] Loaded {} categories", categories.len());
            ctx.store.categories().set(categories);
            ctx.store.categories_failed().set(false);
        }
        Err(e) => {
            log::error!("[Categories] Error loading categories: {}", e);
            ctx.store.categories_failed().set(true);
        }
    }
}

/// Inventory, stats and categories
pub async fn reload_all(ctx: AppContext) {
    load_inventory(ctx).await;
    load_stats(ctx).await;
    load_categories(ctx).await;
}

pub fn schedule_stats_refresh(ctx: AppContext) {
    ctx.stats_refresh.schedule(move || spawn_local(load_stats(ctx)));
}

// ========================
// Search
// ========================

fn show_results(ctx: AppContext, results: Vec<Item>) {
    let limit = ctx.store.search_limit().get_untracked();
    let page = SearchPage::new(results, limit);
    let view = if page.rows.is_empty() {
        SearchView::NoResults
    } else {
        SearchView::Results(page)
    };
    ctx.store.search_view().set(view);
}

pub async fn run_search(ctx: AppContext, raw: String) {
    let step = ctx.search.with_value(|session| session.begin(&raw));
    match step {
        SearchStep::Clear => store_hide_search(&ctx.store),
        SearchStep::Cached(results) => {
            log::debug!("[Search] Using cached results for: {}", raw.trim());
            show_results(ctx, results);
        }
        SearchStep::Fetch(query) => {
            log::debug!("[Search] Searching database for: {}", query);
            match commands::search_items_local(&query).await {
                Ok(results) => {
                    ctx.search
                        .update_value(|session| session.complete(query, results.clone()));
                    show_results(ctx, results);
                }
                Err(e) => {
                    log::error!("[Search] Search error: {}", e);
                    ctx.store.search_view().set(SearchView::Error);
                }
            }
        }
    }
}

/// Debounced entry point for the search input
pub fn search_input_changed(ctx: AppContext, raw: String) {
    ctx.store.search_text().set(raw.clone());
    ctx.search_debounce
        .schedule(move || spawn_local(run_search(ctx, raw)));
}

pub async fn search_online(ctx: AppContext) {
    let raw = ctx.store.search_text().get_untracked();
    let Some(query) = normalize_query(&raw) else {
        return;
    };
    match commands::search_items_cstone(query).await {
        Ok(results) => {
            log::info!("[Search] {} online matches for: {}", results.len(), query);
            ctx.store.search_view().set(SearchView::Online(results));
        }
        Err(e) => {
            log::error!("[Search] Online search error: {}", e);
            ctx.store.search_view().set(SearchView::Error);
        }
    }
}

pub fn set_search_limit(ctx: AppContext, limit: u32) {
    let limit = config::normalize_search_limit(Some(limit));
    config::save_search_limit(limit);
    ctx.store.search_limit().set(limit);
    let raw = ctx.store.search_text().get_untracked();
    if normalize_query(&raw).is_some() {
        spawn_local(run_search(ctx, raw));
    }
}

pub fn reset_search_limit(ctx: AppContext) {
    set_search_limit(ctx, config::DEFAULT_SEARCH_LIMIT);
    log::info!("[Search] Search limit reset");
    ctx.notify(messages::SEARCH_LIMIT_RESET);
}

pub async fn add_online_item(ctx: AppContext, result: OnlineResult) {
    let args = AddItemArgs {
        name: &result.name,
        initial_count: 1,
        ..Default::default()
    };
    match commands::add_item(&args).await {
        Ok(_) => {
            ctx.invalidate_search();
            reload_all(ctx).await;
            ctx.search_debounce.cancel();
            ctx.store.search_text().set(String::new());
            store_hide_search(&ctx.store);
            ctx.notify(messages::item_added(&result.name));
        }
        Err(ApiError::Rejected(error)) => dialog::alert(&messages::adding_failed(&error)),
        Err(e) => {
            log::error!("[Search] Error adding item: {}", e);
            dialog::alert(messages::ERROR_ADDING);
        }
    }
}

// ========================
// Quick Update
// ========================

/// Focus the input the user was working in, caret at the end
pub fn restore_focus(ctx: AppContext) {
    let target = FocusTarget::resolve(
        ctx.store.last_focus().get_untracked(),
        &ctx.store.search_text().get_untracked(),
        &ctx.store.filter_text().get_untracked(),
    );
    let node = match target {
        FocusTarget::Search => ctx.search_input,
        FocusTarget::Filter => ctx.filter_input,
    };
    if let Some(input) = node.get_untracked() {
        if let Err(e) = input.focus() {
            log::debug!("[QuickUpdate] Could not refocus {:?}: {:?}", target, e);
            return;
        }
        let end = caret_end(&input.value());
        if let Err(e) = input.set_selection_range(end, end) {
            log::debug!("[QuickUpdate] Could not move caret: {:?}", e);
        }
    }
}

async fn resync_after_failure(ctx: AppContext, error: &ApiError) {
    log::error!("[QuickUpdate] Error updating count: {}", error);
    dialog::alert(messages::ERROR_UPDATING);
    ctx.invalidate_search();
    load_inventory(ctx).await;
    load_stats(ctx).await;
}

/// +/- from a grid tile or a search row
pub async fn quick_update_count(ctx: AppContext, name: String, delta: i64) {
    let item = match commands::get_item(&name).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            log::error!("[QuickUpdate] Item not found: {}", name);
            return;
        }
        Err(e) => return resync_after_failure(ctx, &e).await,
    };

    let change = CountChange::apply(item.count, delta);
    store_patch_count(&ctx.store, &name, change.next);

    if let Err(e) = commands::update_count(&name, i64::from(change.next)).await {
        return resync_after_failure(ctx, &e).await;
    }
    ctx.invalidate_search();

    match change.followup() {
        Followup::ReloadMembership => {
            log::debug!("[QuickUpdate] {} crossed zero ({} -> {}), reloading", name, change.prior, change.next);
            load_inventory(ctx).await;
            load_stats(ctx).await;
        }
        Followup::PatchInPlace => schedule_stats_refresh(ctx),
    }

    let raw = ctx.store.search_text().get_untracked();
    if normalize_query(&raw).is_some() {
        run_search(ctx, raw).await;
    }

    restore_focus(ctx);
}

// ========================
// Modal
// ========================

/// Show the modal with what we have, then fill in the full record
pub fn open_modal(ctx: AppContext, item: Item) {
    log::info!("[Modal] Opening modal for: {}", item.name);
    let name = item.name.clone();
    ctx.store.modal().set(Some(ModalState { item, refined: false }));

    spawn_local(async move {
        match commands::get_item(&name).await {
            Ok(Some(full)) => store_refine_modal(&ctx.store, full),
            Ok(None) => log::warn!("[Modal] {} no longer exists", name),
            Err(e) => log::error!("[Modal] Error loading item data: {}", e),
        }
    });
}

pub fn close_modal(ctx: AppContext) {
    ctx.store.modal().set(None);
}

pub async fn auto_save_count(ctx: AppContext, name: String, count: u32) {
    match commands::update_count(&name, i64::from(count)).await {
        Ok(()) => {
            ctx.invalidate_search();
            store_patch_count(&ctx.store, &name, count);
            load_inventory(ctx).await;
            load_stats(ctx).await;
            log::info!("[Modal] Auto-saved count for {}: {}", name, count);
        }
        Err(e) => {
            log::error!("[Modal] Error auto-saving count: {}", e);
            dialog::alert(messages::ERROR_AUTO_SAVE);
        }
    }
}

pub async fn auto_save_notes(ctx: AppContext, name: String, notes: String) {
    match commands::update_notes(&name, &notes).await {
        Ok(()) => {
            ctx.invalidate_search();
            log::info!("[Modal] Auto-saved notes for {}", name);
        }
        Err(e) => log::error!("[Modal] Error auto-saving notes: {}", e),
    }
}

pub async fn delete_item(ctx: AppContext, name: String) {
    if !dialog::confirm(&messages::confirm_delete(&name)) {
        return;
    }
    match commands::delete_item(&name).await {
        Ok(()) => {
            // Nothing left to save for a deleted item
            ctx.count_save.cancel();
            ctx.notes_save.cancel();
            ctx.invalidate_search();
            reload_all(ctx).await;
            close_modal(ctx);
        }
        Err(e) => {
            log::error!("[Modal] Error deleting item: {}", e);
            dialog::alert(messages::ERROR_DELETING);
        }
    }
}

// ========================
// Maintenance
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceAction {
    ClearInventory,
    DeleteAllItems,
    ClearCache,
}

impl MaintenanceAction {
    pub const ALL: [MaintenanceAction; 3] = [
        MaintenanceAction::ClearInventory,
        MaintenanceAction::DeleteAllItems,
        MaintenanceAction::ClearCache,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceAction::ClearInventory => messages::CLEAR_INVENTORY,
            MaintenanceAction::DeleteAllItems => messages::DELETE_ALL_ITEMS,
            MaintenanceAction::ClearCache => messages::CLEAR_CACHE,
        }
    }
}

pub async fn run_maintenance(ctx: AppContext, action: MaintenanceAction) {
    let result = match action {
        MaintenanceAction::ClearInventory => commands::clear_inventory().await,
        MaintenanceAction::DeleteAllItems => commands::delete_all_items().await,
        MaintenanceAction::ClearCache => commands::clear_cache().await,
    };
    match result {
        Ok(()) => {
            log::info!("[Maintenance] {:?} done", action);
            ctx.invalidate_search();
            reload_all(ctx).await;
            ctx.notify(messages::maintenance_done(action.label()));
        }
        Err(e) => {
            if e.is_rejection() {
                log::warn!("[Maintenance] {:?} refused: {}", action, e);
            } else {
                log::error!("[Maintenance] {:?} failed: {}", action, e);
            }
            dialog::alert(&messages::maintenance_failed(action.label(), &e.to_string()));
        }
    }
}
