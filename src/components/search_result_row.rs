//! Search Result Row Component
//!
//! One local match: quick -/+ buttons, thumbnail, name and count.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;
use crate::messages;
use crate::models::Item;
use crate::store::store_hide_search;

#[component]
pub fn SearchResultRow(item: Item) -> impl IntoView {
    let ctx = use_app();

    let count = item.count;
    let empty = count == 0;
    let name = item.name.clone();
    let minus_name = item.name.clone();
    let plus_name = item.name.clone();
    let label = item.name.clone();
    let icon_url = item.icon_url.clone();
    let (image_broken, set_image_broken) = signal(false);

    view! {
        <div class="search-result-item">
            <button
                class="search-quick-btn search-btn-minus"
                disabled=empty
                on:click=move |ev| {
                    ev.stop_propagation();
                    if !empty {
                        spawn_local(actions::quick_update_count(ctx, minus_name.clone(), -1));
                    }
                }
            >
                "−"
            </button>
            <button
                class="search-quick-btn search-btn-plus"
                on:click=move |ev| {
                    ev.stop_propagation();
                    spawn_local(actions::quick_update_count(ctx, plus_name.clone(), 1));
                }
            >
                "+"
            </button>

            {match icon_url {
                Some(src) => view! {
                    <Show
                        when=move || !image_broken.get()
                        fallback=|| view! { <span class="search-item-icon">"🎮"</span> }
                    >
                        <img
                            class="search-item-thumbnail"
                            src=src.clone()
                            alt=name.clone()
                            loading="lazy"
                            on:error=move |_| set_image_broken.set(true)
                        />
                    </Show>
                }
                .into_any(),
                None => view! { <span class="search-item-icon">"🎮"</span> }.into_any(),
            }}

            <span
                class="search-item-name"
                on:click=move |_| {
                    store_hide_search(&ctx.store);
                    actions::open_modal(ctx, item.clone());
                }
            >
                {label}
            </span>

            <span class="search-item-count" class:owned=!empty>
                {messages::count_label(count)}
            </span>
        </div>
    }
}
