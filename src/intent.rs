//! User Intents
//!
//! The closed set of list mutations a view can request.

/// A request to mutate the shopping list
///
/// Items are addressed by their index in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a new item (ignored when blank)
    Add(String),
    /// Flip the purchased flag
    Toggle(usize),
    /// Replace the text (blank keeps the previous text)
    Edit(usize, String),
    /// Delete a single item
    Remove(usize),
    /// Delete every item
    Clear,
}
