//! New Item Form Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::intent::Intent;
use crate::models::normalize_text;

/// Text input plus "Add" button; Enter submits
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if normalize_text(&text).is_none() {
            return;
        }
        ctx.dispatch(Intent::Add(text));
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                id="itemInput"
                placeholder="Add an item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="addItemButton">"Add"</button>
        </form>
    }
}
