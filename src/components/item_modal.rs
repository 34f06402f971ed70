//! Item Modal Component
//!
//! Detail view of one item with auto-saving count and notes.
//!
//! Edits are kept in local drafts and saved by the app-level debouncers,
//! so a save scheduled just before closing still goes out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app, AppContext};
use crate::dialog;
use crate::messages;
use crate::quick_update::parse_count;
use crate::store::{Draft, ViewStateStoreFields};

/// Save the count text once the user stops typing
fn schedule_count_save(ctx: AppContext, name: String, text: String, count: RwSignal<Draft>) {
    ctx.count_save.schedule(move || {
        let value = parse_count(&text);
        if value <= 0 && !dialog::confirm(&messages::confirm_zero(&name)) {
            // Back to the last known count; the modal may be gone by now
            let known = ctx
                .store
                .modal()
                .with_untracked(|m| m.as_ref().filter(|m| m.item.name == name).map(|m| m.item.count));
            if let Some(known) = known {
                count.try_update(|draft| draft.reset(known.to_string()));
            }
            return;
        }
        let value = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        spawn_local(actions::auto_save_count(ctx, name, value));
    });
}

/// Count input with -/+ buttons. Only the caption sits in the label, so
/// clicking it focuses the input instead of pressing a button.
#[component]
fn CountField(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_step: Callback<i64>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="modal-field">
            <label for="modal-count">{messages::MODAL_COUNT}</label>
            <div class="modal-count">
                <button class="modal-count-btn" on:click=move |_| on_step.run(-1)>"−"</button>
                <input
                    id="modal-count"
                    type="number"
                    min="0"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button class="modal-count-btn" on:click=move |_| on_step.run(1)>"+"</button>
            </div>
        </div>
    }
}

#[component]
pub fn ItemModal() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let count = RwSignal::new(Draft::default());
    let notes = RwSignal::new(Draft::default());

    // Only a different item or the arrival of the full record touches the
    // fields; in-place count patches leave the user's typing alone
    let identity = Memo::new(move |_| {
        store
            .modal()
            .with(|m| m.as_ref().map(|m| (m.item.name.clone(), m.refined)))
    });
    Effect::new(move |prev: Option<Option<(String, bool)>>| {
        let current = identity.get();
        if let (Some((name, refined)), Some(modal)) = (&current, store.modal().get_untracked()) {
            let same_item = matches!(&prev, Some(Some((prev_name, _))) if prev_name == name);
            let count_text = modal.item.count.to_string();
            let notes_text = modal.item.notes.unwrap_or_default();
            if same_item && *refined {
                count.update(|draft| draft.refine(count_text));
                notes.update(|draft| draft.refine(notes_text));
            } else {
                count.update(|draft| draft.reset(count_text));
                notes.update(|draft| draft.reset(notes_text));
            }
        }
        current
    });

    let current_name = move || {
        store
            .modal()
            .with_untracked(|m| m.as_ref().map(|m| m.item.name.clone()))
    };

    let edit_count = move |text: String| {
        count.update(|draft| draft.edit(text.clone()));
        if let Some(name) = current_name() {
            schedule_count_save(ctx, name, text, count);
        }
    };

    view! {
        <div id="item-modal" class="modal" on:click=move |_| actions::close_modal(ctx)>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| actions::close_modal(ctx)>"×"</button>

                {move || store.modal().get().map(|modal| {
                    let image = if modal.refined {
                        modal.item.modal_image().map(str::to_string)
                    } else {
                        None
                    };
                    let name = modal.item.name.clone();
                    view! {
                        <h2 class="modal-title">{name.clone()}</h2>
                        {modal.item.item_type.clone().map(|t| view! { <div class="modal-category">{t}</div> })}
                        <div class="modal-image">
                            {match image {
                                Some(src) => view! { <img src=src alt=name /> }.into_any(),
                                None => view! { <div class="modal-image-placeholder">"🎮"</div> }.into_any(),
                            }}
                        </div>
                    }
                })}

                <CountField
                    value=Signal::derive(move || count.with(|draft| draft.text.clone()))
                    on_step=move |delta: i64| {
                        let next = (parse_count(&count.with_untracked(|draft| draft.text.clone())) + delta).max(0);
                        edit_count(next.to_string());
                    }
                    on_input=edit_count
                />

                <label class="modal-field">
                    {messages::MODAL_NOTES}
                    <textarea
                        id="modal-notes"
                        placeholder=messages::MODAL_NOTES_PLACEHOLDER
                        prop:value=move || notes.with(|draft| draft.text.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            notes.update(|draft| draft.edit(text.clone()));
                            if let Some(name) = current_name() {
                                ctx.notes_save.schedule(move || {
                                    spawn_local(actions::auto_save_notes(ctx, name, text));
                                });
                            }
                        }
                    ></textarea>
                </label>

                <button
                    class="modal-delete-btn"
                    on:click=move |_| {
                        if let Some(name) = current_name() {
                            spawn_local(actions::delete_item(ctx, name));
                        }
                    }
                >
                    {messages::MODAL_DELETE}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_count_label_holds_only_the_caption() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <CountField
                    value=Signal::derive(|| "2".to_string())
                    on_step=|_: i64| {}
                    on_input=|_: String| {}
                />
            }
            .to_html()
        });

        let start = html.find("<label").expect("label rendered");
        let end = start + html[start..].find("</label>").expect("label closed");
        let label = &html[start..end];
        assert!(label.contains(r#"for="modal-count""#));
        assert!(label.contains(messages::MODAL_COUNT));
        assert!(!label.contains("<button"));
        assert!(!label.contains("<input"));
        assert!(html.contains(r#"id="modal-count""#));
    }
}
