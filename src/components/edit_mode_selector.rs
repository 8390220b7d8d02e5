//! Edit Mode Selector Component
//!
//! Switches between the two item interaction modes.

use leptos::prelude::*;

use crate::config::EditTrigger;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn EditModeSelector() -> impl IntoView {
    let ctx = use_app_context();
    let current = move || ctx.store.edit_trigger().get();

    view! {
        <div class="mode-selector">
            <span class="mode-label">"Interaction:"</span>
            {EditTrigger::ALL.iter().map(|&trigger| {
                let is_selected = move || current() == trigger;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "mode-btn active" } else { "mode-btn" }
                        on:click=move |_| ctx.set_edit_trigger(trigger)
                    >
                        {trigger.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
