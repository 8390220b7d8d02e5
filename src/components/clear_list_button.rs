//! Clear List Button Component

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::intent::Intent;
use crate::store::AppStateStoreFields;

#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_app_context();
    let empty = Signal::derive(move || ctx.store.items().read().is_empty());

    view! {
        <ConfirmButton
            button_class="clear-btn"
            label="Clear list"
            prompt="Clear every item?"
            disabled=empty
            on_confirm=Callback::new(move |_: ()| ctx.dispatch(Intent::Clear))
        />
    }
}
