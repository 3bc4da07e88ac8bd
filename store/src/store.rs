//! The store: a concurrent map of todo items plus the identifier sequence.
//!
//! # Design
//! - `RwLock<HashMap>` for the collection, `AtomicU64` for the counter. Each
//!   single-item write and each id assignment is atomic with respect to
//!   concurrent callers; `all()` takes a best-effort snapshot.
//! - Identifiers start at 1 and are never reused, even after deletion.
//! - The completion timestamp is written only here, on the false→true
//!   transition of an update.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use crate::item::{TodoDraft, TodoItem};

/// Exclusive owner of the todo collection and the identifier sequence.
///
/// All methods take `&self` and complete synchronously; share it across
/// request handlers behind an `Arc`.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: RwLock<HashMap<u64, TodoItem>>,
    next_id: AtomicU64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// All items, ordered by creation time ascending. The id tiebreak keeps
    /// insertion order when two creates land on the same instant.
    pub fn all(&self) -> Vec<TodoItem> {
        let items = self.items.read().expect("todo store lock poisoned");
        let mut todos: Vec<TodoItem> = items.values().cloned().collect();
        todos.sort_by_key(|t| (t.created_at, t.id));
        todos
    }

    pub fn get(&self, id: u64) -> Option<TodoItem> {
        let items = self.items.read().expect("todo store lock poisoned");
        items.get(&id).cloned()
    }

    /// Stores a new item built from the draft. The id and `created_at` are
    /// assigned here; the draft's completion flag is ignored — new items
    /// always start incomplete.
    pub fn create(&self, draft: TodoDraft) -> TodoItem {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let item = TodoItem {
            id,
            title: draft.title,
            description: draft.description,
            is_completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };
        let mut items = self.items.write().expect("todo store lock poisoned");
        items.insert(id, item.clone());
        item
    }

    /// Overwrites title, description and completion flag from the draft,
    /// keeping id and `created_at`. Returns `None` if no item has this id.
    ///
    /// Completion timestamp transition:
    /// - false→true sets `completed_at` to now;
    /// - true→true leaves it unchanged;
    /// - any →false clears it.
    pub fn update(&self, id: u64, draft: TodoDraft) -> Option<TodoItem> {
        let mut items = self.items.write().expect("todo store lock poisoned");
        let item = items.get_mut(&id)?;

        item.title = draft.title;
        item.description = draft.description;

        let was_completed = item.is_completed;
        item.is_completed = draft.is_completed;
        item.completed_at = match (draft.is_completed, was_completed) {
            (true, false) => Some(Utc::now()),
            (true, true) => item.completed_at,
            (false, _) => None,
        };

        Some(item.clone())
    }

    /// Removes the item. Returns whether removal occurred.
    pub fn delete(&self, id: u64) -> bool {
        let mut items = self.items.write().expect("todo store lock poisoned");
        items.remove(&id).is_some()
    }
}
