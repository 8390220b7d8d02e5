//! List Store
//!
//! Owns the ordered item sequence and mirrors it into persisted storage
//! after every mutation.

use crate::error::StorageResult;
use crate::intent::Intent;
use crate::models::{normalize_text, Item};
use crate::storage::ListStorage;

/// Default storage slot for the serialized list
pub const DEFAULT_STORAGE_KEY: &str = "shoppingList";

/// Serialize items as a JSON array in display order
pub fn encode(items: &[Item]) -> StorageResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parse a JSON array of items
pub fn decode(raw: &str) -> StorageResult<Vec<Item>> {
    Ok(serde_json::from_str(raw)?)
}

/// In-memory shopping list backed by a storage slot
#[derive(Debug, Clone)]
pub struct ListStore<S: ListStorage> {
    storage: S,
    key: String,
    items: Vec<Item>,
}

impl<S: ListStorage> ListStore<S> {
    /// Create a store and hydrate it from `storage[key]`
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            items: Vec::new(),
        };
        store.items = store.load();
        store
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }

    /// Apply a single intent
    pub fn dispatch(&mut self, intent: Intent) {
        log::debug!("[STORE] dispatch {:?}", intent);
        match intent {
            Intent::Add(text) => {
                self.add(&text);
            }
            Intent::Toggle(index) => self.toggle(index),
            Intent::Edit(index, text) => self.edit(index, &text),
            Intent::Remove(index) => self.remove(index),
            Intent::Clear => self.clear(),
        }
    }

    /// Append a new unpurchased item, returning its index
    ///
    /// Blank input is ignored.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        let text = normalize_text(text)?;
        self.items.push(Item::new(text));
        self.save();
        Some(self.items.len() - 1)
    }

    pub fn toggle(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            log::warn!("[STORE] toggle: no item at index {}", index);
            return;
        };
        item.purchased = !item.purchased;
        self.save();
    }

    /// Replace the text at `index`; blank input keeps the previous text
    pub fn edit(&mut self, index: usize, new_text: &str) {
        let Some(item) = self.items.get_mut(index) else {
            log::warn!("[STORE] edit: no item at index {}", index);
            return;
        };
        if let Some(text) = normalize_text(new_text) {
            item.text = text;
        }
        self.save();
    }

    pub fn remove(&mut self, index: usize) {
        if index >= self.items.len() {
            log::warn!("[STORE] remove: no item at index {}", index);
            return;
        }
        self.items.remove(index);
        self.save();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Read the persisted list
    ///
    /// Missing or unparseable data yields an empty list. Entries with blank
    /// text are dropped; the rest come back exactly as stored.
    pub fn load(&self) -> Vec<Item> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("[STORE] discarding stored list '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> StorageResult<Vec<Item>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let stored = decode(&raw)?;
        let total = stored.len();
        let items: Vec<Item> = stored
            .into_iter()
            .filter(|item| normalize_text(&item.text).is_some())
            .collect();
        if items.len() != total {
            log::warn!("[STORE] dropped {} blank entries", total - items.len());
        }
        log::info!("[STORE] loaded {} items", items.len());
        Ok(items)
    }

    /// Overwrite the storage slot with the full list
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            log::warn!("[STORE] failed to persist list '{}': {}", self.key, e);
        }
    }

    fn try_save(&self) -> StorageResult<()> {
        let raw = encode(&self.items)?;
        self.storage.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;

    const KEY: &str = DEFAULT_STORAGE_KEY;

    fn setup() -> (ListStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (ListStore::new(storage.clone(), KEY), storage)
    }

    fn persisted(storage: &MemoryStorage) -> Vec<Item> {
        decode(&storage.raw(KEY).expect("nothing persisted")).expect("bad json")
    }

    fn item(text: &str, purchased: bool) -> Item {
        Item {
            text: text.to_string(),
            purchased,
        }
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl ListStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(Some(r#"[{"text":"Milk","purchased":false}]"#.to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let (mut store, storage) = setup();

        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   \t"), None);

        assert!(store.is_empty());
        assert_eq!(storage.raw(KEY), None);
    }

    #[test]
    fn test_add_then_reload() {
        let (mut store, storage) = setup();

        assert_eq!(store.add("  Milk "), Some(0));

        let reloaded = ListStore::new(storage, KEY);
        assert_eq!(reloaded.items(), &[item("Milk", false)]);
    }

    #[test]
    fn test_toggle_twice_persists_each_step() {
        let (mut store, storage) = setup();
        store.add("Milk");

        store.toggle(0);
        assert!(store.items()[0].purchased);
        assert_eq!(persisted(&storage), vec![item("Milk", true)]);

        store.toggle(0);
        assert!(!store.items()[0].purchased);
        assert_eq!(persisted(&storage), vec![item("Milk", false)]);
    }

    #[test]
    fn test_edit_blank_keeps_text() {
        let (mut store, storage) = setup();
        store.add("Milk");

        store.edit(0, "   ");

        assert_eq!(store.items()[0].text, "Milk");
        assert_eq!(persisted(&storage), vec![item("Milk", false)]);
    }

    #[test]
    fn test_edit_updates_persisted_text() {
        let (mut store, storage) = setup();
        store.add("Milk");
        store.toggle(0);

        store.edit(0, " Eggs ");

        assert_eq!(persisted(&storage), vec![item("Eggs", true)]);
    }

    #[test]
    fn test_clear_empties_memory_and_storage() {
        let (mut store, storage) = setup();
        store.add("Milk");
        store.add("Bread");

        store.clear();

        assert!(store.is_empty());
        assert_eq!(storage.raw(KEY), Some("[]".to_string()));
        assert!(ListStore::new(storage, KEY).is_empty());
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let (mut store, storage) = setup();
        store.add("Milk");
        store.add("Bread");
        store.add("Eggs");

        store.remove(1);

        assert_eq!(store.items(), &[item("Milk", false), item("Eggs", false)]);
        assert_eq!(persisted(&storage), store.items().to_vec());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let (mut store, storage) = setup();
        store.add("Milk");
        let before = storage.raw(KEY);

        store.toggle(5);
        store.edit(5, "Eggs");
        store.remove(5);

        assert_eq!(store.items(), &[item("Milk", false)]);
        assert_eq!(storage.raw(KEY), before);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let (mut store, _storage) = setup();

        store.dispatch(Intent::Add("Milk".to_string()));
        store.dispatch(Intent::Add("Bread".to_string()));
        store.dispatch(Intent::Toggle(1));
        store.dispatch(Intent::Edit(0, "Oat milk".to_string()));
        assert_eq!(store.items(), &[item("Oat milk", false), item("Bread", true)]);
        assert_eq!(store.purchased_count(), 1);

        store.dispatch(Intent::Remove(0));
        assert_eq!(store.items(), &[item("Bread", true)]);

        store.dispatch(Intent::Clear);
        assert!(store.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let items = vec![
            item("Milk", false),
            item("Bread", true),
            item("Eggs \"free range\"", false),
            item("Äpfel", true),
        ];
        let raw = encode(&items).unwrap();
        assert_eq!(decode(&raw).unwrap(), items);
    }

    #[test]
    fn test_reload_returns_stored_items_unchanged() {
        let items = vec![
            item(" Eggs ", true),
            item("Milk", false),
            item("Bread\t", true),
        ];
        let storage = MemoryStorage::new();
        storage.set(KEY, &encode(&items).unwrap()).unwrap();

        let store = ListStore::new(storage.clone(), KEY);
        assert_eq!(store.items(), items.as_slice());
        assert_eq!(store.len(), 3);
        assert_eq!(store.purchased_count(), 2);

        store.save();
        assert_eq!(ListStore::new(storage, KEY).items(), items.as_slice());
    }

    #[test]
    fn test_purchased_count() {
        let (mut store, _storage) = setup();
        assert_eq!(store.purchased_count(), 0);

        store.add("Milk");
        store.add("Bread");
        store.add("Eggs");
        store.toggle(0);
        store.toggle(2);
        assert_eq!(store.purchased_count(), 2);

        store.remove(0);
        assert_eq!(store.purchased_count(), 1);
    }

    #[test]
    fn test_persisted_layout() {
        let (mut store, storage) = setup();
        store.add("Milk");
        store.toggle(0);

        assert_eq!(
            storage.raw(KEY).unwrap(),
            r#"[{"text":"Milk","purchased":true}]"#
        );
    }

    #[test]
    fn test_load_absent_or_malformed_is_empty() {
        let storage = MemoryStorage::new();
        assert!(ListStore::new(storage.clone(), KEY).is_empty());

        for raw in ["not json", "{\"text\":\"Milk\"}", "[1, 2]", "null", ""] {
            storage.set(KEY, raw).unwrap();
            assert!(ListStore::new(storage.clone(), KEY).is_empty(), "input: {}", raw);
        }
    }

    #[test]
    fn test_load_drops_blank_entries() {
        let storage = MemoryStorage::new();
        storage
            .set(
                KEY,
                r#"[{"text":"Milk","purchased":true},{"text":"  ","purchased":false},{"text":" Eggs ","purchased":false}]"#,
            )
            .unwrap();

        let store = ListStore::new(storage, KEY);
        assert_eq!(store.items(), &[item("Milk", true), item(" Eggs ", false)]);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = ListStore::new(ReadOnlyStorage, KEY);
        assert_eq!(store.len(), 1);

        store.add("Bread");
        store.toggle(0);

        assert_eq!(store.items(), &[item("Milk", true), item("Bread", false)]);
    }

    #[test]
    fn test_separate_keys_are_independent() {
        let storage = MemoryStorage::new();
        let mut first = ListStore::new(storage.clone(), "a");
        first.add("Milk");

        assert!(ListStore::new(storage, "b").is_empty());
    }
}
