//! Browser Storage
//!
//! `DurableStore` backed by `window.localStorage`.

use todo_store::{DurableStore, StorageError, StoreConfig, TodoListStore, UnavailableStorage};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl DurableStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: describe(&e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: describe(&e),
        })
    }
}

/// The store used by the app
pub type BrowserTodoStore = TodoListStore<Box<dyn DurableStore>>;

/// Open a store on browser storage, or on `UnavailableStorage` with a
/// visible notice when the browser refuses.
pub fn open_todo_store(config: StoreConfig) -> BrowserTodoStore {
    match BrowserStorage::open() {
        Ok(storage) => BrowserTodoStore::new(Box::new(storage), config),
        Err(err) => fallback_store(config, &err),
    }
}

fn fallback_store(config: StoreConfig, err: &StorageError) -> BrowserTodoStore {
    log::warn!("{}; todos will not survive a reload", err);
    BrowserTodoStore::new(Box::new(UnavailableStorage::new(err.to_string())), config)
        .with_storage_notice(format!(
            "Browser storage is unavailable ({err}). Todos will be lost on reload."
        ))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
