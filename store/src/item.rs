//! Domain types for the todo API.
//!
//! # Design
//! `TodoItem` is the stored entity; `TodoDraft` is what clients send. The
//! split keeps server-owned fields (`id`, `created_at`, `completed_at`) out
//! of the input type entirely — serde drops any the client sends, so the
//! store never has to ignore them field by field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item. Constructed and mutated only by [`TodoStore`].
///
/// `completed_at` is `Some` exactly when `is_completed` is true and the item
/// has been completed since its last incompletion.
///
/// [`TodoStore`]: crate::TodoStore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Client-supplied candidate for create and update.
///
/// A missing `title` deserializes to the empty string rather than failing,
/// so the boundary can answer blank and missing titles with the same 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoDraft {
    /// Whether the draft carries a usable title (non-empty after trimming).
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
