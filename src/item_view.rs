//! Item Interaction State Machine
//!
//! Per-item Display/Editing states, independent of any rendering surface.
//! The `ShoppingItem` component forwards DOM events here and dispatches
//! whatever [`Intent`] comes back.

use crate::config::EditTrigger;
use crate::intent::Intent;
use crate::models::{normalize_text, Item};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Display,
    Editing { original: String, draft: String },
}

/// User input on a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Single click on the item text
    Click,
    /// Double click on the item text
    DoubleClick,
    EditButton,
    PurchaseButton,
    RemoveButton,
    /// Edit input changed
    Input(String),
    /// Edit input lost focus
    Blur,
    /// Enter pressed in the edit input
    Enter,
    /// Escape pressed in the edit input
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    index: usize,
    text: String,
    purchased: bool,
    trigger: EditTrigger,
    mode: ViewMode,
}

impl ItemView {
    pub fn new(index: usize, item: &Item, trigger: EditTrigger) -> Self {
        Self {
            index,
            text: item.text.clone(),
            purchased: item.purchased,
            trigger,
            mode: ViewMode::Display,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn purchased(&self) -> bool {
        self.purchased
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ViewMode::Editing { .. })
    }

    /// Current edit input value, if editing
    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            ViewMode::Editing { draft, .. } => Some(draft),
            ViewMode::Display => None,
        }
    }

    /// Whether clicks currently toggle the purchased flag
    ///
    /// Disarmed while editing so clicks inside the input don't toggle.
    pub fn toggle_armed(&self) -> bool {
        !self.is_editing()
    }

    /// Pick up the latest stored values for this index
    ///
    /// The edit draft is left alone while editing.
    pub fn refresh(&mut self, item: &Item) {
        self.text = item.text.clone();
        self.purchased = item.purchased;
    }

    /// Feed one event through the state machine
    pub fn handle(&mut self, event: ViewEvent) -> Option<Intent> {
        if let ViewMode::Editing { draft, .. } = &mut self.mode {
            return match event {
                ViewEvent::Input(value) => {
                    *draft = value;
                    None
                }
                ViewEvent::Blur | ViewEvent::Enter => Some(self.commit()),
                ViewEvent::Escape => {
                    self.mode = ViewMode::Display;
                    None
                }
                _ => None,
            };
        }

        match (self.trigger, event) {
            (EditTrigger::Button, ViewEvent::PurchaseButton)
            | (EditTrigger::DoubleClick, ViewEvent::Click) => self.toggle(),
            (EditTrigger::Button, ViewEvent::EditButton)
            | (EditTrigger::DoubleClick, ViewEvent::DoubleClick) => {
                self.begin_edit();
                None
            }
            (_, ViewEvent::RemoveButton) => Some(Intent::Remove(self.index)),
            _ => None,
        }
    }

    fn toggle(&mut self) -> Option<Intent> {
        self.purchased = !self.purchased;
        Some(Intent::Toggle(self.index))
    }

    fn begin_edit(&mut self) {
        self.mode = ViewMode::Editing {
            original: self.text.clone(),
            draft: self.text.clone(),
        };
    }

    fn commit(&mut self) -> Intent {
        let mode = std::mem::replace(&mut self.mode, ViewMode::Display);
        if let ViewMode::Editing { original, draft } = mode {
            self.text = normalize_text(&draft).unwrap_or(original);
        }
        Intent::Edit(self.index, self.text.clone())
    }
}
