//! Frontend Models
//!
//! Data structures persisted in browser storage.

use serde::{Deserialize, Serialize};

/// A single shopping-list entry
///
/// Serialized as `{"text": "...", "purchased": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    #[serde(default)]
    pub purchased: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            purchased: false,
        }
    }
}

/// Trim user input, returning `None` when nothing is left
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
