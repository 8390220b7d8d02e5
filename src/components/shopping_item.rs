//! Shopping Item Component
//!
//! One list row. DOM events go through `ItemView`; any resulting intent is
//! dispatched to the list store.

use leptos::html;
use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::config::EditTrigger;
use crate::context::use_app_context;
use crate::item_view::{ItemView, ViewEvent};
use crate::models::Item;
use crate::store::AppStateStoreFields;

/// A single item row at `index`
#[component]
pub fn ShoppingItem(index: usize, trigger: EditTrigger) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let initial = store
        .items()
        .read_untracked()
        .get(index)
        .cloned()
        .unwrap_or_else(|| Item::new(""));
    let view_state = RwSignal::new(ItemView::new(index, &initial, trigger));
    let input_ref = NodeRef::<html::Input>::new();

    // Follow store changes for this index
    Effect::new(move |_| {
        let item = store.items().read().get(index).cloned();
        if let Some(item) = item {
            view_state.update(|v| v.refresh(&item));
        }
    });

    // Focus the edit input as soon as it appears
    Effect::new(move |_| {
        if view_state.with(|v| v.is_editing()) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // The row may already be disposed when a late blur arrives
    let send = move |event: ViewEvent| {
        if let Some(intent) = view_state.try_update(|v| v.handle(event)).flatten() {
            ctx.dispatch(intent);
        }
    };

    let editing = move || view_state.with(|v| v.is_editing());
    let purchased = move || view_state.with(|v| v.purchased());
    let row_class = move || {
        let mut c = String::from("list-item");
        if purchased() {
            c.push_str(" purchased");
        }
        if view_state.with(|v| !v.toggle_armed()) {
            c.push_str(" editing");
        }
        c
    };

    view! {
        <li class=row_class>
            <Show
                when=editing
                fallback=move || view! {
                    <span
                        class="item-text"
                        on:click=move |_| send(ViewEvent::Click)
                        on:dblclick=move |_| send(ViewEvent::DoubleClick)
                    >
                        {move || view_state.with(|v| v.text().to_string())}
                    </span>
                }
            >
                <input
                    type="text"
                    class="edit-input"
                    node_ref=input_ref
                    prop:value=move || view_state.with_untracked(|v| v.draft().unwrap_or_default().to_string())
                    on:input=move |ev| send(ViewEvent::Input(event_target_value(&ev)))
                    on:blur=move |_| send(ViewEvent::Blur)
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => send(ViewEvent::Enter),
                        "Escape" => send(ViewEvent::Escape),
                        _ => {}
                    }
                />
            </Show>

            {(trigger == EditTrigger::Button).then(|| view! {
                <button
                    class="edit-btn"
                    disabled=editing
                    on:click=move |_| send(ViewEvent::EditButton)
                >
                    "Edit"
                </button>
                <button
                    class="purchase-btn"
                    disabled=editing
                    on:click=move |_| send(ViewEvent::PurchaseButton)
                >
                    {move || if purchased() { "Undo" } else { "Purchased" }}
                </button>
            })}

            <ConfirmButton
                button_class="remove-btn"
                label="×"
                prompt="Remove?"
                disabled=Signal::derive(editing)
                on_confirm=Callback::new(move |_: ()| send(ViewEvent::RemoveButton))
            />
        </li>
    }
}
