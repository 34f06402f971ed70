//! Inventory Grid Component

use leptos::prelude::*;

use crate::components::InventoryTile;
use crate::context::use_app;
use crate::messages;
use crate::store::{LoadStatus, ViewStateStoreFields};

#[component]
pub fn InventoryGrid() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let empty_message = move || match store.query().with(|q| q.category_filter.clone()) {
        Some(category) => messages::category_empty(&category),
        None => messages::INVENTORY_EMPTY.to_string(),
    };

    view! {
        <div id="inventory-grid" class="inventory-grid">
            {move || match store.inventory_status().get() {
                LoadStatus::Loading => ().into_any(),
                LoadStatus::Failed => view! {
                    <div class="grid-message error">{messages::INVENTORY_LOAD_ERROR}</div>
                }
                .into_any(),
                LoadStatus::Ready => view! {
                    <Show
                        when=move || !store.items().with(|items| items.is_empty())
                        fallback=move || view! { <div class="grid-message">{empty_message}</div> }
                    >
                        // Count in the key so a patched count re-renders the tile
                        <For
                            each=move || store.items().get()
                            key=|item| (item.name.clone(), item.count)
                            children=move |item| view! { <InventoryTile item=item /> }
                        />
                    </Show>
                }
                .into_any(),
            }}
        </div>
    }
}
