//! Inventory Tile Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;
use crate::messages;
use crate::models::Item;
use crate::store::ViewStateStoreFields;

/// One grid tile. Hidden, not removed, when the name filter excludes it.
#[component]
pub fn InventoryTile(item: Item) -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let visible = {
        let item = item.clone();
        move || store.filter_text().with(|needle| item.matches_filter(needle))
    };
    let minus_name = item.name.clone();
    let plus_name = item.name.clone();
    let label = item.name.clone();
    let count = messages::count_label(item.count);
    let thumb = item.thumb_url.clone();

    view! {
        <div
            class="item-card"
            style:display=move || if visible() { "" } else { "none" }
            on:click=move |_| actions::open_modal(ctx, item.clone())
        >
            <div class="item-card-image">
                {match thumb {
                    Some(src) => view! { <img src=src alt=label.clone() loading="lazy" /> }.into_any(),
                    None => view! { <div class="item-card-placeholder">"🎮"</div> }.into_any(),
                }}
            </div>
            <div class="item-card-name">{label.clone()}</div>
            <div class="item-card-footer">
                <button
                    class="quick-btn quick-btn-minus"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        spawn_local(actions::quick_update_count(ctx, minus_name.clone(), -1));
                    }
                >
                    "−"
                </button>
                <span class="item-card-count">{count}</span>
                <button
                    class="quick-btn quick-btn-plus"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        spawn_local(actions::quick_update_count(ctx, plus_name.clone(), 1));
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
