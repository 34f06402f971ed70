//! Notification Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::ViewStateStoreFields;

/// Transient message; `AppContext::notify` clears it after a delay
#[component]
pub fn Notification() -> impl IntoView {
    let store = use_app().store;

    move || {
        store
            .notice()
            .get()
            .map(|text| view! { <div class="notification">{text}</div> })
    }
}
