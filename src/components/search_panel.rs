//! Search Panel Component
//!
//! Debounced search input, result limit selector, and the results dropdown
//! (local matches, online matches, or a message).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{OnlinePreview, SearchResultRow};
use crate::config::SEARCH_LIMIT_OPTIONS;
use crate::context::use_app;
use crate::messages;
use crate::quick_update::FocusTarget;
use crate::store::{SearchView, ViewStateStoreFields};

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    view! {
        <section class="search-panel">
            <div class="search-bar">
                <input
                    id="search-input"
                    type="text"
                    autocomplete="off"
                    placeholder=messages::SEARCH_PLACEHOLDER
                    node_ref=ctx.search_input
                    prop:value=move || store.search_text().get()
                    on:focus=move |_| store.last_focus().set(Some(FocusTarget::Search))
                    on:input=move |ev| actions::search_input_changed(ctx, event_target_value(&ev))
                />
                <label class="search-limit">
                    {messages::SEARCH_LIMIT_LABEL}
                    <select
                        id="search-limit"
                        prop:value=move || store.search_limit().get().to_string()
                        on:change=move |ev| {
                            if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                                actions::set_search_limit(ctx, limit);
                            }
                        }
                    >
                        {SEARCH_LIMIT_OPTIONS.iter().map(|limit| {
                            let value = limit.to_string();
                            view! { <option value=value.clone()>{value.clone()}</option> }
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <SearchResults />
            <OnlinePreview />
        </section>
    }
}

/// Results dropdown under the search bar
#[component]
fn SearchResults() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    move || match store.search_view().get() {
        SearchView::Hidden => view! { <div id="search-results" class="search-results hidden"></div> }.into_any(),
        SearchView::Results(page) => {
            let banner = page
                .is_truncated()
                .then(|| messages::showing_results(page.rows.len(), page.total));
            view! {
                <div id="search-results" class="search-results">
                    {banner.map(|text| view! { <div class="search-info">{text}</div> })}
                    <For
                        each=move || page.rows.clone()
                        key=|item| (item.name.clone(), item.count)
                        children=move |item| view! { <SearchResultRow item=item /> }
                    />
                </div>
            }
            .into_any()
        }
        SearchView::NoResults => view! {
            <div id="search-results" class="search-results">
                <div class="search-message">{messages::SEARCH_NO_RESULTS}</div>
                <button class="search-online-btn" on:click=move |_| spawn_local(actions::search_online(ctx))>
                    {messages::SEARCH_ONLINE}
                </button>
            </div>
        }
        .into_any(),
        SearchView::Error => view! {
            <div id="search-results" class="search-results">
                <div class="search-message error">{messages::SEARCH_ERROR}</div>
            </div>
        }
        .into_any(),
        SearchView::Online(results) => {
            let empty = results.is_empty();
            view! {
                <div id="search-results" class="search-results online">
                    <Show when=move || empty>
                        <div class="search-message">{messages::SEARCH_ONLINE_EMPTY}</div>
                    </Show>
                    {results.into_iter().map(|result| {
                        let name = result.name.clone();
                        view! {
                            <div
                                class="search-result-item online-result"
                                on:click=move |_| store.preview().set(Some(result.clone()))
                            >
                                <span class="search-item-name">{name}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            }
            .into_any()
        }
    }
}
