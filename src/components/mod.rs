//! UI Components
//!
//! Leptos components for the shopping list.

mod shopping_item;
mod item_list;
mod new_item_form;
mod clear_list_button;
mod confirm_button;
mod edit_mode_selector;

pub use shopping_item::ShoppingItem;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use clear_list_button::ClearListButton;
pub use confirm_button::ConfirmButton;
pub use edit_mode_selector::EditModeSelector;
