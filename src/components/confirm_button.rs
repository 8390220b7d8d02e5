//! Confirm Button Component
//!
//! A button that asks once before running a destructive action. Used for
//! removing one item and for clearing the whole list.

use leptos::prelude::*;

/// Shows `label`; the first click swaps in `prompt` with ✓/✗
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    disabled: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    // A disabled button drops any pending confirmation
    Effect::new(move |_| {
        if disabled.get() {
            set_confirming.set(false);
        }
    });

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let button_class = button_class.clone();
                let label = label.clone();
                view! {
                    <button
                        type="button"
                        class=button_class
                        disabled=move || disabled.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(true);
                        }
                    >
                        {label}
                    </button>
                }
            }
        >
            <span class="confirm-prompt">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
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
                    type="button"
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
