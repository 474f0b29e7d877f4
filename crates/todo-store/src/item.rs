//! Todo Item
//!
//! A list entry with a session-stable identifier.

use std::fmt;

/// Opaque identifier for an item, unique within one store instance.
///
/// Identifiers are handed out by the store from a monotonic counter and are
/// not persisted; reloading assigns fresh ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Text exactly as typed (not trimmed)
    pub text: String,
}

impl TodoItem {
    pub(crate) fn new(id: TodoId, text: String) -> Self {
        Self { id, text }
    }
}
