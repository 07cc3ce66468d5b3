//! Storage Codec
//!
//! JSON encoding of a `TodoList` and the validating decoder used on hydration.
//!
//! Stored shape, newest first:
//! `[{"text": "buy milk", "done": false, "createdAt": 1700000000000}]`

use crate::error::DecodeError;
use crate::model::{Todo, TodoList};

/// Serialize the full collection
pub fn encode(list: &TodoList) -> Result<String, DecodeError> {
    serde_json::to_string(list).map_err(DecodeError::Encode)
}

/// Parse and validate a stored value.
///
/// Every entry must carry `text` (string), `done` (bool) and `createdAt`
/// (non-negative integer) and nothing else; identifiers must be unique.
pub fn decode(raw: &str) -> Result<TodoList, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(DecodeError::Syntax)?;
    if !value.is_array() {
        return Err(DecodeError::NotAnArray);
    }
    let items: Vec<Todo> = serde_json::from_value(value).map_err(DecodeError::Shape)?;
    TodoList::from_items(items).map_err(DecodeError::DuplicateId)
}
