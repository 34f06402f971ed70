//! Category Bar Component
//!
//! "All" plus one button per category. Selecting one reloads the inventory
//! with that filter applied server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;
use crate::messages;
use crate::store::ViewStateStoreFields;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let select = move |category: Option<String>| {
        log::info!("[Categories] Filter: {}", category.as_deref().unwrap_or("all"));
        store.query().write().category_filter = category;
        spawn_local(actions::load_inventory(ctx));
    };

    view! {
        <div id="category-filter" class="category-filter">
            <button
                class="category-btn"
                class:active=move || store.query().with(|q| q.category_filter.is_none())
                on:click=move |_| select(None)
            >
                {messages::CATEGORY_ALL}
            </button>

            <For
                each=move || store.categories().get()
                key=|category| category.clone()
                children=move |category| {
                    let value = category.clone();
                    let is_active = {
                        let category = category.clone();
                        move || store.query().with(|q| q.category_filter.as_deref() == Some(category.as_str()))
                    };
                    view! {
                        <button
                            class="category-btn"
                            class:active=is_active
                            on:click=move |_| select(Some(value.clone()))
                        >
                            {category}
                        </button>
                    }
                }
            />

            <Show when=move || store.categories_failed().get()>
                <span class="category-error">{messages::CATEGORY_LOAD_ERROR}</span>
            </Show>
        </div>
    }
}
