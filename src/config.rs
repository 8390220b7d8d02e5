//! App Configuration
//!
//! Interaction mode and storage slot, persisted as JSON next to the list.

use serde::{Deserialize, Serialize};

use crate::error::StorageResult;
use crate::list_store::DEFAULT_STORAGE_KEY;
use crate::storage::ListStorage;

/// Storage slot holding the serialized [`AppConfig`]
pub const SETTINGS_KEY: &str = "shoppingListSettings";

/// How an item enters edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditTrigger {
    /// Separate edit and purchase buttons
    #[default]
    Button,
    /// Click toggles purchased, double-click edits
    DoubleClick,
}

impl EditTrigger {
    pub const ALL: [EditTrigger; 2] = [EditTrigger::Button, EditTrigger::DoubleClick];

    pub fn label(&self) -> &'static str {
        match self {
            EditTrigger::Button => "Buttons",
            EditTrigger::DoubleClick => "Click / double-click",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub edit_trigger: EditTrigger,
    /// Storage slot for the list itself
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            edit_trigger: EditTrigger::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings, falling back to defaults on absent or malformed data
    pub fn load(storage: &impl ListStorage) -> Self {
        let loaded = storage
            .get(SETTINGS_KEY)
            .and_then(|raw| match raw {
                Some(raw) => Ok(Some(serde_json::from_str::<AppConfig>(&raw)?)),
                None => Ok(None),
            });
        match loaded {
            Ok(Some(mut config)) => {
                let key = config.storage_key.trim();
                if key.is_empty() || key == SETTINGS_KEY {
                    log::warn!("[CONFIG] unusable storage key {:?}", config.storage_key);
                    config.storage_key = DEFAULT_STORAGE_KEY.to_string();
                }
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &impl ListStorage) -> StorageResult<()> {
        let raw = serde_json::to_string(self)?;
        storage.set(SETTINGS_KEY, &raw)
    }
}
