//! Reactive View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Fields are
//! written only from `TodoListStore` snapshots.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{TodoId, TodoItem, TodoSnapshot};

/// Rendered copy of the to-do state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in display order
    pub todos: Vec<TodoItem>,
    /// Current input value
    pub draft: String,
    /// Item being edited, if any
    pub editing: Option<TodoId>,
    pub validation_message: Option<String>,
    /// Set while the last write to browser storage failed
    pub storage_notice: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a snapshot into the store, touching only fields that changed
pub fn store_apply_snapshot(store: &AppStore, snapshot: &TodoSnapshot) {
    if store.todos().with_untracked(|todos| *todos != snapshot.items) {
        *store.todos().write() = snapshot.items.clone();
    }
    if store.draft().with_untracked(|draft| *draft != snapshot.draft) {
        *store.draft().write() = snapshot.draft.clone();
    }
    if store.editing().get_untracked() != snapshot.editing {
        *store.editing().write() = snapshot.editing;
    }
    if store.validation_message().with_untracked(|msg| *msg != snapshot.validation_message) {
        *store.validation_message().write() = snapshot.validation_message.clone();
    }
    if store.storage_notice().with_untracked(|notice| *notice != snapshot.storage_notice) {
        *store.storage_notice().write() = snapshot.storage_notice.clone();
    }
}
