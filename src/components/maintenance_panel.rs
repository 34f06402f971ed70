//! Maintenance Panel Component
//!
//! Bulk actions, each behind an inline confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, MaintenanceAction};
use crate::components::ConfirmButton;
use crate::context::use_app;
use crate::messages;

#[component]
pub fn MaintenancePanel() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="maintenance-panel">
            <h2>{messages::MAINTENANCE_TITLE}</h2>
            <div class="maintenance-actions">
                {MaintenanceAction::ALL.into_iter().map(|action| view! {
                    <ConfirmButton
                        label=action.label()
                        button_class="maintenance-btn"
                        on_confirm=move |_| spawn_local(actions::run_maintenance(ctx, action))
                    />
                }).collect_view()}
            </div>
        </section>
    }
}
