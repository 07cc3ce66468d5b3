//! Intents
//!
//! Named requests to change the todo collection.

use crate::model::{TodoId, TodoList};

/// A state change request dispatched by the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Insert a new item at the front. `created_at` is the wanted identifier;
    /// the reducer steps past it if already taken.
    AddItem { text: String, created_at: TodoId },
    /// Remove an item
    DeleteItem(TodoId),
    /// Replace the text of an item
    EditItem { id: TodoId, text: String },
    /// Flip the done flag of an item
    ToggleDone(TodoId),
    /// Remove every item
    ClearAll,
    /// Swap in a whole collection (hydration only)
    ReplaceAll(TodoList),
}

impl Intent {
    pub fn add(text: impl Into<String>, created_at: u64) -> Self {
        Intent::AddItem {
            text: text.into(),
            created_at: TodoId(created_at),
        }
    }

    pub fn edit(id: TodoId, text: impl Into<String>) -> Self {
        Intent::EditItem { id, text: text.into() }
    }

    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Intent::AddItem { .. } => "add",
            Intent::DeleteItem(_) => "delete",
            Intent::EditItem { .. } => "edit",
            Intent::ToggleDone(_) => "toggle",
            Intent::ClearAll => "clear_all",
            Intent::ReplaceAll(_) => "replace_all",
        }
    }

    /// Whether the persistence bridge writes a snapshot after this intent
    pub fn persists(&self) -> bool {
        !matches!(self, Intent::ReplaceAll(_))
    }
}
