//! TaskChanger Store
//!
//! Platform-independent state for the to-do list:
//! - item: stable identifiers and list entries
//! - storage: durable key-value capability and the persisted list format
//! - store: `TodoListStore`, the single owner of list state
//! - config: tunable constants with serde overrides

mod config;
mod error;
mod item;
mod storage;
mod store;

#[cfg(test)]
mod properties;

pub use config::{AppConfig, StoreConfig, UiConfig};
pub use error::{CodecError, StorageError, StoreError, StoreResult};
pub use item::{TodoId, TodoItem};
pub use storage::{decode_list, encode_list, DurableStore, MemoryStorage, UnavailableStorage};
pub use store::{SubmitOutcome, TodoListStore, TodoSnapshot};
