//! Item List Component
//!
//! Renders every stored item in display order.

use leptos::prelude::*;

use crate::components::ShoppingItem;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Rows are addressed by index; a mode switch rebuilds them all
    let rows = move || {
        let trigger = store.edit_trigger().get();
        let len = store.items().read().len();
        (0..len).map(|index| (index, trigger)).collect::<Vec<_>>()
    };

    view! {
        <ul class="shopping-list" id="shoppingList">
            <For
                each=rows
                key=|row| *row
                children=move |(index, trigger)| view! {
                    <ShoppingItem index=index trigger=trigger />
                }
            />
        </ul>
        <Show when=move || store.items().read().is_empty()>
            <p class="empty-hint">"Your list is empty."</p>
        </Show>
    }
}
