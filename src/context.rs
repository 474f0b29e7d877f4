//! Application Context
//!
//! Shared handle to the `TodoListStore` provided via Leptos Context API.

use leptos::prelude::*;
use todo_store::{StoreError, TodoId};

use crate::storage::BrowserTodoStore;

/// Commands the components send to the store
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: StoredValue<BrowserTodoStore, LocalStorage>,
}

impl TodoContext {
    pub fn new(store: BrowserTodoStore) -> Self {
        Self {
            store: StoredValue::new_local(store),
        }
    }

    pub fn set_draft(&self, text: String) {
        self.store.update_value(|store| store.set_draft(text));
    }

    /// Add or update from the draft
    pub fn submit(&self) {
        self.store.update_value(|store| match store.submit() {
            Ok(outcome) => log::debug!("submitted: {:?}", outcome),
            // Shown to the user as the validation message
            Err(StoreError::EmptyDraft) => {}
            Err(err) => log::error!("submit failed: {}", err),
        });
    }

    pub fn begin_edit(&self, id: TodoId) {
        self.store.update_value(|store| {
            if let Err(err) = store.begin_edit_item(id) {
                log::error!("cannot edit {}: {}", id, err);
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.store.update_value(|store| {
            store.cancel_edit();
        });
    }

    pub fn delete(&self, id: TodoId) {
        self.store.update_value(|store| {
            if let Err(err) = store.delete_item(id) {
                log::error!("cannot delete {}: {}", id, err);
            }
        });
    }

    pub fn delete_all(&self) {
        self.store.update_value(|store| store.delete_all());
    }

    pub fn retry_persist(&self) {
        self.store.update_value(|store| {
            if store.retry_persist().is_ok() {
                log::info!("saved pending changes");
            }
        });
    }
}

/// Get the todo context from the component tree
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
