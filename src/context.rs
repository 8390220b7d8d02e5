//! Application Context
//!
//! Explicit dependencies shared with components via the Leptos Context API.

use leptos::prelude::*;

use crate::config::{AppConfig, EditTrigger};
use crate::intent::Intent;
use crate::list_store::ListStore;
use crate::storage::BrowserStorage;
use crate::store::{store_set_edit_trigger, store_set_items, AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner of the list and its persisted copy
    list: StoredValue<ListStore<BrowserStorage>>,
    /// Current settings
    config: StoredValue<AppConfig>,
    /// Render-side mirror of the list
    pub store: AppStore,
}

impl AppContext {
    pub fn new(list: ListStore<BrowserStorage>, config: AppConfig, store: AppStore) -> Self {
        let ctx = Self {
            list: StoredValue::new(list),
            config: StoredValue::new(config.clone()),
            store,
        };
        store_set_edit_trigger(&ctx.store, config.edit_trigger);
        ctx.sync();
        ctx
    }

    /// Apply an intent to the list, then refresh the mirror
    pub fn dispatch(&self, intent: Intent) {
        self.list.update_value(|list| list.dispatch(intent));
        self.sync();
    }

    /// Copy the list into the reactive store
    fn sync(&self) {
        let items = self.list.with_value(|list| list.items().to_vec());
        log::debug!("[CTX] syncing {} items", items.len());
        store_set_items(&self.store, items);
    }

    /// `(items, purchased)` totals, re-run whenever the list changes
    pub fn counts(&self) -> (usize, usize) {
        self.store.items().track();
        self.list.with_value(|list| (list.len(), list.purchased_count()))
    }

    /// Switch interaction mode and persist the choice
    pub fn set_edit_trigger(&self, trigger: EditTrigger) {
        self.config.update_value(|config| {
            config.edit_trigger = trigger;
            if let Err(e) = config.save(&BrowserStorage) {
                log::warn!("[CTX] failed to save settings: {}", e);
            }
        });
        store_set_edit_trigger(&self.store, trigger);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
