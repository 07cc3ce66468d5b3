//! Todo Models
//!
//! Item and collection types shared by the reducer, the codec and the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo identifier: creation time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl TodoId {
    /// Next identifier after this one, used to step past collisions
    pub fn next(&self) -> Self {
        TodoId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item (matches the persisted shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    /// Text content
    pub text: String,
    /// Completion status
    pub done: bool,
    /// Creation time, doubles as the identifier
    #[serde(rename = "createdAt")]
    pub created_at: TodoId,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            created_at: id,
        }
    }

    pub fn id(&self) -> TodoId {
        self.created_at
    }
}

/// Ordered todo collection, newest first.
///
/// Identifiers are unique. The only ways to build a list with items are the
/// reducer and the storage codec, both of which keep that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from items, refusing duplicate identifiers
    pub fn from_items(items: Vec<Todo>) -> Result<Self, TodoId> {
        let mut seen = std::collections::HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(item.id());
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Items not yet done, in collection order
    pub fn ongoing(&self) -> Vec<Todo> {
        self.items.iter().filter(|item| !item.done).cloned().collect()
    }

    /// Items marked done, in collection order
    pub fn completed(&self) -> Vec<Todo> {
        self.items.iter().filter(|item| item.done).cloned().collect()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// First identifier at or after `wanted` that no item uses
    pub(crate) fn free_id_from(&self, wanted: TodoId) -> TodoId {
        let mut id = wanted;
        while self.contains(id) {
            id = id.next();
        }
        id
    }

    pub(crate) fn with_front(&self, item: Todo) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Self { items }
    }

    pub(crate) fn without(&self, id: TodoId) -> Self {
        Self {
            items: self.items.iter().filter(|item| item.id() != id).cloned().collect(),
        }
    }

    pub(crate) fn map_item(&self, id: TodoId, f: impl Fn(&mut Todo)) -> Self {
        Self {
            items: self
                .items
                .iter()
                .cloned()
                .map(|mut item| {
                    if item.id() == id {
                        f(&mut item);
                    }
                    item
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, text: &str, done: bool) -> Todo {
        Todo {
            text: text.to_string(),
            done,
            created_at: TodoId(id),
        }
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let items = vec![make_todo(1, "a", false), make_todo(1, "b", true)];
        assert_eq!(TodoList::from_items(items), Err(TodoId(1)));
    }

    #[test]
    fn test_ongoing_and_completed_keep_order() {
        let list = TodoList::from_items(vec![
            make_todo(4, "d", true),
            make_todo(3, "c", false),
            make_todo(2, "b", true),
            make_todo(1, "a", false),
        ])
        .unwrap();

        let ongoing: Vec<u64> = list.ongoing().iter().map(|t| t.id().0).collect();
        let completed: Vec<u64> = list.completed().iter().map(|t| t.id().0).collect();
        assert_eq!(ongoing, vec![3, 1]);
        assert_eq!(completed, vec![4, 2]);
        assert_eq!(list.done_count(), 2);
    }

    #[test]
    fn test_free_id_skips_taken_values() {
        let list = TodoList::from_items(vec![make_todo(10, "a", false), make_todo(11, "b", false)]).unwrap();
        assert_eq!(list.free_id_from(TodoId(10)), TodoId(12));
        assert_eq!(list.free_id_from(TodoId(9)), TodoId(9));
    }
}
