//! Stats Panel Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::messages;
use crate::store::ViewStateStoreFields;

fn stat_item(label: &'static str, value: impl Fn() -> String + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="stat-item">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    view! {
        <section id="stats" class="stats-panel">
            <h2>{messages::STATS_TITLE}</h2>
            <div class="stats-grid">
                {stat_item(messages::STATS_TOTAL_DB, move || store.stats().with(|s| s.total_items_in_db.to_string()))}
                {stat_item(messages::STATS_UNIQUE, move || store.stats().with(|s| s.inventory_unique_items.to_string()))}
                {stat_item(messages::STATS_TOTAL_COUNT, move || store.stats().with(|s| s.total_item_count.to_string()))}
                {stat_item(messages::STATS_CACHE, move || store.stats().with(|s| messages::cache_size(s.cache_size_mb)))}
            </div>

            <h3>{messages::STATS_BY_CATEGORY}</h3>
            <div class="category-stats">
                <For
                    each=move || store.stats().with(|s| s.category_rows())
                    key=|row| row.clone()
                    children=|(category, count)| view! {
                        <div class="category-stat">
                            <span class="category-stat-name">{category}</span>
                            <span class="category-stat-count">{count}</span>
                        </div>
                    }
                />
            </div>
        </section>
    }
}
