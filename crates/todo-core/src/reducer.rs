//! Reducer
//!
//! Pure `apply(list, intent) -> list'`. Never mutates its input.

use crate::intent::Intent;
use crate::model::{Todo, TodoList};

/// Apply an intent and return the resulting collection.
///
/// Intents naming a missing identifier return an unchanged copy, as do
/// `AddItem` and `EditItem` with blank text.
pub fn apply(list: &TodoList, intent: Intent) -> TodoList {
    match intent {
        Intent::AddItem { text, created_at } => {
            if text.trim().is_empty() {
                log::debug!("[STORE] ignoring add with empty text");
                return list.clone();
            }
            let id = list.free_id_from(created_at);
            list.with_front(Todo::new(id, text))
        }
        Intent::DeleteItem(id) => {
            if !list.contains(id) {
                log::debug!("[STORE] delete: no todo {}", id);
                return list.clone();
            }
            list.without(id)
        }
        Intent::EditItem { id, text } => {
            if text.trim().is_empty() {
                log::debug!("[STORE] edit: ignoring empty text for {}", id);
                return list.clone();
            }
            if !list.contains(id) {
                log::debug!("[STORE] edit: no todo {}", id);
                return list.clone();
            }
            list.map_item(id, |item| item.text = text.clone())
        }
        Intent::ToggleDone(id) => {
            if !list.contains(id) {
                log::debug!("[STORE] toggle: no todo {}", id);
                return list.clone();
            }
            list.map_item(id, |item| item.done = !item.done)
        }
        Intent::ClearAll => TodoList::new(),
        Intent::ReplaceAll(replacement) => replacement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoId;
    use proptest::prelude::*;

    fn add(list: &TodoList, text: &str, at: u64) -> TodoList {
        apply(list, Intent::add(text, at))
    }

    #[test]
    fn test_add_inserts_at_front_not_done() {
        let list = add(&TodoList::new(), "first", 100);
        let list = add(&list, "second", 200);

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].text, "second");
        assert_eq!(list.as_slice()[1].text, "first");
        assert!(list.iter().all(|t| !t.done));
    }

    #[test]
    fn test_add_same_timestamp_gets_distinct_ids() {
        let list = add(&TodoList::new(), "a", 500);
        let list = add(&list, "b", 500);

        let ids: Vec<TodoId> = list.iter().map(Todo::id).collect();
        assert_eq!(ids, vec![TodoId(501), TodoId(500)]);
    }

    #[test]
    fn test_add_empty_text_is_noop() {
        let list = add(&TodoList::new(), "keep", 1);
        assert_eq!(add(&list, "", 2), list);
        assert_eq!(add(&list, "   ", 3), list);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let list = add(&TodoList::new(), "original", 1);
        let snapshot = list.clone();
        let _ = apply(&list, Intent::ToggleDone(TodoId(1)));
        let _ = apply(&list, Intent::edit(TodoId(1), "changed"));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_edit_changes_only_target_text() {
        let list = add(&TodoList::new(), "a", 1);
        let list = add(&list, "b", 2);
        let list = apply(&list, Intent::ToggleDone(TodoId(1)));

        let edited = apply(&list, Intent::edit(TodoId(1), "a2"));
        let target = edited.get(TodoId(1)).unwrap();
        assert_eq!(target.text, "a2");
        assert!(target.done);
        assert_eq!(edited.get(TodoId(2)), list.get(TodoId(2)));
    }

    #[test]
    fn test_edit_to_blank_text_keeps_old_text() {
        let list = add(&TodoList::new(), "keep me", 1);
        assert_eq!(apply(&list, Intent::edit(TodoId(1), "")), list);
        assert_eq!(apply(&list, Intent::edit(TodoId(1), "  \t")), list);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let list = add(&TodoList::new(), "a", 1);
        let once = apply(&list, Intent::ToggleDone(TodoId(1)));
        assert!(once.get(TodoId(1)).unwrap().done);
        let twice = apply(&once, Intent::ToggleDone(TodoId(1)));
        assert_eq!(twice, list);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let list = add(&TodoList::new(), "a", 1);
        let deleted = apply(&list, Intent::DeleteItem(TodoId(1)));
        assert!(deleted.is_empty());

        assert_eq!(apply(&deleted, Intent::DeleteItem(TodoId(1))), deleted);
        assert_eq!(apply(&deleted, Intent::edit(TodoId(1), "x")), deleted);
        assert_eq!(apply(&deleted, Intent::ToggleDone(TodoId(1))), deleted);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let list = add(&TodoList::new(), "buy milk", 1_700_000_000_000);
        assert_eq!(list.len(), 1);
        let id = list.as_slice()[0].id();
        assert_eq!(list.as_slice()[0].text, "buy milk");
        assert!(!list.as_slice()[0].done);

        let list = apply(&list, Intent::ToggleDone(id));
        assert!(list.get(id).unwrap().done);

        let list = apply(&list, Intent::edit(id, "buy oat milk"));
        assert_eq!(list.get(id).unwrap().text, "buy oat milk");
        assert!(list.get(id).unwrap().done);

        let list = apply(&list, Intent::ClearAll);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_replace_all_swaps_collection() {
        let current = add(&TodoList::new(), "old", 1);
        let incoming = add(&TodoList::new(), "new", 9);
        assert_eq!(apply(&current, Intent::ReplaceAll(incoming.clone())), incoming);
    }

    proptest! {
        #[test]
        fn prop_added_ids_are_unique(stamps in proptest::collection::vec(0u64..20, 1..40)) {
            let mut list = TodoList::new();
            for (i, at) in stamps.iter().enumerate() {
                list = add(&list, &format!("todo {}", i), *at);
            }
            prop_assert_eq!(list.len(), stamps.len());
            let mut ids: Vec<TodoId> = list.iter().map(Todo::id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), stamps.len());
        }
    }
}
