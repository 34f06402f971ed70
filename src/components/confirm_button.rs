//! Confirm Button Component
//!
//! Inline confirmation for destructive actions.

use leptos::prelude::*;

use crate::messages;

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows "Sure?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Text of the initial button
/// * `button_class` - CSS class for the initial button
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm-inline">
                <span class="confirm-text">{messages::CONFIRM_PROMPT}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
