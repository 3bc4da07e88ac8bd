//! In-memory todo store.
//!
//! # Overview
//! Owns the todo collection and the identifier sequence. The HTTP layer
//! (the `todo-server` crate) holds a shared `TodoStore` and translates its
//! `Option`/`bool` results into status codes; nothing in here touches the
//! network or the filesystem.
//!
//! # Design
//! - All operations are synchronous map accesses behind a `std::sync::RwLock`
//!   with an atomic id counter, so the crate stays runtime-free.
//! - Absence is signaled with `Option` / `bool`, never a panic — not-found is
//!   the store's only failure mode.

pub mod item;
pub mod store;

pub use item::{TodoDraft, TodoItem};
pub use store::TodoStore;
