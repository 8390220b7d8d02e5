//! Reactive Application State
//!
//! Uses Leptos reactive_stores so components re-render on field changes.
//! The list itself lives in `ListStore`; this is the render-side mirror.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::EditTrigger;
use crate::models::Item;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Active interaction mode
    pub edit_trigger: EditTrigger,
}

pub type AppStore = Store<AppState>;

/// Replace the mirrored items
pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

pub fn store_set_edit_trigger(store: &AppStore, trigger: EditTrigger) {
    *store.edit_trigger().write() = trigger;
}
