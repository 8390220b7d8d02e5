//! Shopping List App
//!
//! Root component: builds the list store from persisted state and wires it
//! into context for the components below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearListButton, EditModeSelector, ItemList, NewItemForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::list_store::ListStore;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load(&BrowserStorage);
    log::info!("[APP] starting with {:?}", config);

    let list = ListStore::new(BrowserStorage, config.storage_key.clone());
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(list, config, store);

    provide_context(ctx);

    let summary = move || {
        let (total, purchased) = ctx.counts();
        format!("{} items, {} purchased", total, purchased)
    };

    view! {
        <main class="app">
            <h1>"Shopping List"</h1>
            <EditModeSelector />
            <NewItemForm />
            <ItemList />
            <footer class="list-footer">
                <p class="item-count">{summary}</p>
                <ClearListButton />
            </footer>
        </main>
    }
}
