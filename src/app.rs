//! GearCrate Frontend App
//!
//! Page layout, global keyboard shortcuts and the initial load.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{
    CategoryBar, InventoryGrid, InventoryToolbar, ItemModal, MaintenancePanel, Notification, SearchPanel, StatsPanel,
};
use crate::config;
use crate::context::AppContext;
use crate::messages;
use crate::store::{ViewState, ViewStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ViewState::new(config::load_search_limit()));
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    spawn_local(actions::reload_all(ctx));

    // Escape closes the modal, Ctrl+Shift+R resets the search limit
    let _keys = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.modal().with_untracked(|m| m.is_some()) {
            actions::close_modal(ctx);
        } else if ev.ctrl_key() && ev.shift_key() && ev.key().eq_ignore_ascii_case("r") {
            ev.prevent_default();
            actions::reset_search_limit(ctx);
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{messages::APP_TITLE}</h1>
            </header>

            <main class="main-content">
                <SearchPanel />

                <section class="inventory">
                    <InventoryToolbar />
                    <CategoryBar />
                    <InventoryGrid />
                </section>
            </main>

            <aside class="sidebar">
                <StatsPanel />
                <MaintenancePanel />
            </aside>

            <Show when=move || store.modal().with(|m| m.is_some())>
                <ItemModal />
            </Show>
            <Notification />
        </div>
    }
}
