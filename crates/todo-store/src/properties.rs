//! Property tests for store invariants.
//!
//! 1. Any non-blank draft is appended unchanged
//! 2. Blank drafts never mutate the list
//! 3. Edit then submit replaces exactly one position
//! 4. Delete removes exactly one item and shifts the rest
//! 5. Persisted list reloads to the same sequence
//! 6. Arbitrary operation sequences match a plain `Vec` model

use proptest::prelude::*;
use proptest::sample::Index;

use crate::{decode_list, MemoryStorage, StoreError, TodoListStore};

// ── Strategies ──────────────────────────────────────────────────────────

fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\n\r\u{00A0}\u{2003}\u{3000}]{0,6}"
}

fn non_blank_text() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("needs a non-whitespace char", |s| !s.trim().is_empty())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), blank_text()]
}

fn list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<String>(), 0..8)
}

fn non_empty_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<String>(), 1..8)
}

#[derive(Debug, Clone)]
enum Op {
    Type(String),
    Submit,
    Edit(Index),
    Delete(Index),
    DeleteAll,
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any_text().prop_map(Op::Type),
        Just(Op::Submit),
        any::<Index>().prop_map(Op::Edit),
        any::<Index>().prop_map(Op::Delete),
        Just(Op::DeleteAll),
        Just(Op::Cancel),
    ]
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn seeded(texts: &[String]) -> (TodoListStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::with_entry("todos", &serde_json::to_string(texts).unwrap());
    (TodoListStore::with_defaults(storage.clone()), storage)
}

fn texts(store: &TodoListStore<MemoryStorage>) -> Vec<String> {
    store.items().iter().map(|item| item.text.clone()).collect()
}

fn persisted(storage: &MemoryStorage) -> Vec<String> {
    storage
        .get("todos")
        .map(|raw| decode_list(&raw).unwrap())
        .unwrap_or_default()
}

/// Reference behaviour: positional cursor shifted on delete
#[derive(Debug, Default)]
struct Model {
    items: Vec<String>,
    draft: String,
    editing: Option<usize>,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match op {
            Op::Type(text) => self.draft = text.clone(),
            Op::Submit => {
                if self.draft.trim().is_empty() {
                    return;
                }
                let text = std::mem::take(&mut self.draft);
                match self.editing.take() {
                    Some(index) => self.items[index] = text,
                    None => self.items.push(text),
                }
            }
            Op::Edit(ix) => {
                if self.items.is_empty() {
                    return;
                }
                let index = ix.index(self.items.len());
                self.draft = self.items[index].clone();
                self.editing = Some(index);
            }
            Op::Delete(ix) => {
                if self.items.is_empty() {
                    return;
                }
                let index = ix.index(self.items.len());
                self.items.remove(index);
                match self.editing {
                    Some(editing) if editing == index => {
                        self.editing = None;
                        self.draft.clear();
                    }
                    Some(editing) if editing > index => self.editing = Some(editing - 1),
                    _ => {}
                }
            }
            Op::DeleteAll => {
                self.items.clear();
                self.editing = None;
                self.draft.clear();
            }
            Op::Cancel => {
                if self.editing.take().is_some() {
                    self.draft.clear();
                }
            }
        }
    }
}

fn apply(store: &mut TodoListStore<MemoryStorage>, op: &Op) {
    let len = store.len();
    match op {
        Op::Type(text) => store.set_draft(text.clone()),
        Op::Submit => {
            let _ = store.submit();
        }
        Op::Edit(_) if len == 0 => {
            assert!(matches!(store.begin_edit(0), Err(StoreError::IndexOutOfRange { .. })));
        }
        Op::Edit(ix) => store.begin_edit(ix.index(len)).unwrap(),
        Op::Delete(_) if len == 0 => {
            assert!(matches!(store.delete_one(0), Err(StoreError::IndexOutOfRange { .. })));
        }
        Op::Delete(ix) => {
            store.delete_one(ix.index(len)).unwrap();
        }
        Op::DeleteAll => store.delete_all(),
        Op::Cancel => {
            store.cancel_edit();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Submit
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_blank_draft_is_appended(existing in list(), text in non_blank_text()) {
        let (mut store, storage) = seeded(&existing);
        store.set_draft(text.clone());
        store.submit().unwrap();

        let mut expected = existing;
        expected.push(text);
        prop_assert_eq!(texts(&store), expected.clone());
        prop_assert_eq!(persisted(&storage), expected);
        prop_assert_eq!(store.draft(), "");
        prop_assert_eq!(store.validation_message(), None);
    }

    #[test]
    fn blank_draft_never_mutates(existing in list(), text in blank_text(), edit in any::<Option<Index>>()) {
        let (mut store, storage) = seeded(&existing);
        if let (Some(ix), false) = (edit, existing.is_empty()) {
            store.begin_edit(ix.index(existing.len())).unwrap();
        }
        let stored_before = storage.get("todos");

        store.set_draft(text);
        prop_assert!(matches!(store.submit(), Err(StoreError::EmptyDraft)));

        prop_assert_eq!(texts(&store), existing);
        prop_assert_eq!(storage.get("todos"), stored_before);
        prop_assert_eq!(store.validation_message(), Some("Kindly add something"));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3-4. Edit and delete by position
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edit_replaces_only_target(existing in non_empty_list(), ix in any::<Index>(), text in non_blank_text()) {
        let (mut store, _storage) = seeded(&existing);
        let index = ix.index(existing.len());

        store.begin_edit(index).unwrap();
        store.set_draft(text.clone());
        store.submit().unwrap();

        let mut expected = existing;
        expected[index] = text;
        prop_assert_eq!(texts(&store), expected);
        prop_assert_eq!(store.editing(), None);
    }

    #[test]
    fn delete_removes_exactly_one(existing in non_empty_list(), ix in any::<Index>()) {
        let (mut store, storage) = seeded(&existing);
        let index = ix.index(existing.len());

        let removed = store.delete_one(index).unwrap();

        let mut expected = existing.clone();
        let expected_removed = expected.remove(index);
        prop_assert_eq!(removed.text, expected_removed);
        prop_assert_eq!(store.len(), existing.len() - 1);
        prop_assert_eq!(texts(&store), expected.clone());
        prop_assert_eq!(persisted(&storage), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Round trip
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn persisted_list_reloads_identically(existing in list()) {
        let (mut store, storage) = seeded(&existing);
        store.retry_persist().unwrap();

        let reloaded = TodoListStore::with_defaults(storage);
        prop_assert_eq!(texts(&reloaded), existing);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Operation sequences
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operation_sequences_match_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let (mut store, storage) = seeded(&[]);
        let mut model = Model::default();

        for op in &ops {
            apply(&mut store, op);
            model.apply(op);

            prop_assert_eq!(texts(&store), model.items.clone());
            prop_assert_eq!(store.draft(), model.draft.as_str());
            prop_assert_eq!(store.editing_index(), model.editing);
            prop_assert_eq!(persisted(&storage), model.items.clone());
        }
    }
}
