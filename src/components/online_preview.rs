//! Online Preview Component
//!
//! The online match selected for adding, with its source link.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app;
use crate::messages;
use crate::store::ViewStateStoreFields;

#[component]
pub fn OnlinePreview() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    move || {
        store.preview().get().map(|result| {
            let name = result.name.clone();
            let url = result.url.clone();
            view! {
                <div id="item-preview" class="item-preview">
                    <h3>{name}</h3>
                    {url.map(|href| view! {
                        <a class="item-preview-link" href=href.clone() target="_blank" rel="noopener">{href.clone()}</a>
                    })}
                    <button
                        id="add-button"
                        class="add-btn"
                        on:click=move |_| spawn_local(actions::add_online_item(ctx, result.clone()))
                    >
                        {messages::ADD_TO_INVENTORY}
                    </button>
                </div>
            }
        })
    }
}
