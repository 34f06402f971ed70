//! Inventory Toolbar Component
//!
//! Sort field buttons, sort order toggle and the client-side name filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;
use crate::messages;
use crate::models::{SortField, SortOrder};
use crate::quick_update::FocusTarget;
use crate::store::ViewStateStoreFields;

fn sort_label(field: SortField) -> &'static str {
    match field {
        SortField::Name => messages::SORT_NAME,
        SortField::Count => messages::SORT_COUNT,
        SortField::Date => messages::SORT_DATE,
    }
}

#[component]
pub fn InventoryToolbar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    view! {
        <div class="inventory-toolbar">
            <div class="sort-buttons">
                {SortField::ALL.into_iter().map(|field| {
                    let is_active = move || store.query().with(|q| q.sort_by == field);
                    view! {
                        <button
                            class="sort-btn"
                            class:active=is_active
                            data-sort=field.as_str()
                            on:click=move |_| {
                                store.query().write().sort_by = field;
                                spawn_local(actions::load_inventory(ctx));
                            }
                        >
                            {sort_label(field)}
                        </button>
                    }
                }).collect_view()}

                <button
                    id="sort-order-btn"
                    class="sort-order-btn"
                    on:click=move |_| {
                        store.query().update(|q| q.sort_order = q.sort_order.toggled());
                        spawn_local(actions::load_inventory(ctx));
                    }
                >
                    {move || match store.query().with(|q| q.sort_order) {
                        SortOrder::Asc => messages::SORT_ASCENDING,
                        SortOrder::Desc => messages::SORT_DESCENDING,
                    }}
                </button>
            </div>

            <input
                id="filter-input"
                type="text"
                autocomplete="off"
                placeholder=messages::FILTER_PLACEHOLDER
                node_ref=ctx.filter_input
                prop:value=move || store.filter_text().get()
                on:focus=move |_| store.last_focus().set(Some(FocusTarget::Filter))
                on:input=move |ev| store.filter_text().set(event_target_value(&ev))
            />
        </div>
    }
}
