//! Todo List Store
//!
//! Sole owner of the list, draft, edit cursor, and user-facing messages.
//! Every list mutation is written through to the durable store, and every
//! observable change is pushed to subscribers as a `TodoSnapshot`.

use log::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::item::{TodoId, TodoItem};
use crate::storage::{decode_list, encode_list, DurableStore};

/// Result of a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft appended as a new item
    Added(TodoId),
    /// Draft replaced the text of the item being edited
    Updated(TodoId),
}

/// Owned copy of the store state handed to subscribers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoSnapshot {
    pub items: Vec<TodoItem>,
    pub draft: String,
    pub editing: Option<TodoId>,
    pub editing_index: Option<usize>,
    pub validation_message: Option<String>,
    pub storage_notice: Option<String>,
}

type Observer = Box<dyn FnMut(&TodoSnapshot)>;

/// Ordered to-do list synchronized with a `DurableStore`
pub struct TodoListStore<S> {
    storage: S,
    config: StoreConfig,
    items: Vec<TodoItem>,
    next_id: u64,
    draft: String,
    /// Invariant: when set, refers to an item in `items`
    editing: Option<TodoId>,
    validation_message: Option<String>,
    storage_notice: Option<String>,
    observers: Vec<Observer>,
}

impl<S: DurableStore> TodoListStore<S> {
    /// Rehydrate from `storage`; absent or unreadable data starts an empty list.
    pub fn new(storage: S, config: StoreConfig) -> Self {
        let texts = load_texts(&storage, &config.storage_key);
        info!("loaded {} todos from `{}`", texts.len(), config.storage_key);

        let mut store = Self {
            storage,
            config,
            items: Vec::with_capacity(texts.len()),
            next_id: 1,
            draft: String::new(),
            editing: None,
            validation_message: None,
            storage_notice: None,
            observers: Vec::new(),
        };
        for text in texts {
            let id = store.allocate_id();
            store.items.push(TodoItem::new(id, text));
        }
        store
    }

    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, StoreConfig::default())
    }

    /// Start with a storage notice already showing, e.g. when the durable
    /// store is known to be unusable.
    pub fn with_storage_notice(mut self, notice: impl Into<String>) -> Self {
        self.storage_notice = Some(notice.into());
        self
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register an observer. It receives the current snapshot right away and
    /// a fresh one after every change.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&TodoSnapshot) + 'static) {
        observer(&self.snapshot());
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    // ========================
    // Operations
    // ========================

    /// Replace the draft. Typing dismisses any validation message.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.validation_message = None;
        self.notify();
    }

    /// Add the draft as a new item, or commit it to the item being edited.
    ///
    /// A blank draft sets the validation message and changes nothing else.
    pub fn submit(&mut self) -> StoreResult<SubmitOutcome> {
        if self.draft.trim().is_empty() {
            self.validation_message = Some(self.config.empty_draft_message.clone());
            self.notify();
            return Err(StoreError::EmptyDraft);
        }

        let text = std::mem::take(&mut self.draft);
        let target = self
            .editing
            .take()
            .and_then(|id| self.position_of(id).map(|index| (id, index)));

        let outcome = match target {
            Some((id, index)) => {
                debug!("updating todo {} at {}", id, index);
                self.items[index].text = text;
                SubmitOutcome::Updated(id)
            }
            None => {
                let id = self.allocate_id();
                debug!("adding todo {}", id);
                self.items.push(TodoItem::new(id, text));
                SubmitOutcome::Added(id)
            }
        };

        self.validation_message = None;
        self.persist().ok();
        self.notify();
        Ok(outcome)
    }

    /// Load the item at `index` into the draft and mark it as being edited.
    pub fn begin_edit(&mut self, index: usize) -> StoreResult<()> {
        let id = self.item_at(index)?.id;
        self.begin_edit_item(id)
    }

    pub fn begin_edit_item(&mut self, id: TodoId) -> StoreResult<()> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::UnknownItem(id))?;
        self.draft = item.text.clone();
        self.editing = Some(id);
        self.validation_message = None;
        self.notify();
        Ok(())
    }

    /// Abandon the current edit. Returns whether an edit was in progress.
    pub fn cancel_edit(&mut self) -> bool {
        if self.editing.take().is_none() {
            return false;
        }
        self.draft.clear();
        self.validation_message = None;
        self.notify();
        true
    }

    /// Remove the item at `index`; later items shift down by one.
    pub fn delete_one(&mut self, index: usize) -> StoreResult<TodoItem> {
        self.item_at(index)?;
        let removed = self.items.remove(index);
        debug!("deleted todo {} at {}", removed.id, index);

        // The cursor tracks an id, so edits of later items stay aligned.
        if self.editing == Some(removed.id) {
            self.editing = None;
            self.draft.clear();
        }

        self.persist().ok();
        self.notify();
        Ok(removed)
    }

    pub fn delete_item(&mut self, id: TodoId) -> StoreResult<TodoItem> {
        let index = self.position_of(id).ok_or(StoreError::UnknownItem(id))?;
        self.delete_one(index)
    }

    /// Empty the list and abandon any edit.
    pub fn delete_all(&mut self) {
        debug!("deleting all {} todos", self.items.len());
        self.items.clear();
        self.editing = None;
        self.draft.clear();
        self.persist().ok();
        self.notify();
    }

    /// Write the current list again, e.g. after a quota error was resolved.
    pub fn retry_persist(&mut self) -> StoreResult<()> {
        let result = self.persist();
        self.notify();
        result
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    /// Current position of the item being edited
    pub fn editing_index(&self) -> Option<usize> {
        self.editing.and_then(|id| self.position_of(id))
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn storage_notice(&self) -> Option<&str> {
        self.storage_notice.as_deref()
    }

    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            items: self.items.clone(),
            draft: self.draft.clone(),
            editing: self.editing,
            editing_index: self.editing_index(),
            validation_message: self.validation_message.clone(),
            storage_notice: self.storage_notice.clone(),
        }
    }

    // ========================
    // Internals
    // ========================

    fn allocate_id(&mut self) -> TodoId {
        let id = TodoId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position_of(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn item_at(&self, index: usize) -> StoreResult<&TodoItem> {
        self.items.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Overwrite the stored list and update the storage notice.
    fn persist(&mut self) -> StoreResult<()> {
        let result = encode_list(&self.items)
            .map_err(StoreError::from)
            .and_then(|encoded| {
                self.storage
                    .write(&self.config.storage_key, &encoded)
                    .map_err(StoreError::from)
            });

        match &result {
            Ok(()) => self.storage_notice = None,
            Err(err) => {
                warn!("failed to persist {} todos: {}", self.items.len(), err);
                self.storage_notice = Some(format!("Your changes could not be saved: {err}"));
            }
        }
        result
    }
}

fn load_texts<S: DurableStore>(storage: &S, key: &str) -> Vec<String> {
    match storage.read(key) {
        Ok(None) => Vec::new(),
        Ok(Some(text)) => decode_list(&text).unwrap_or_else(|err| {
            warn!("discarding stored todos under `{}`: {}", key, err);
            Vec::new()
        }),
        Err(err) => {
            warn!("could not read stored todos: {}", err);
            Vec::new()
        }
    }
}
