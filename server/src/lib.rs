//! HTTP boundary for the todo store.
//!
//! # Overview
//! An axum router over a shared [`TodoStore`]. Handlers do minimal
//! validation (non-blank title) and translate the store's `Option`/`bool`
//! results into status codes; all item state lives in the store.
//!
//! # Design
//! - The store is constructed by the caller and injected into [`app`] — no
//!   ambient singleton.
//! - PUT is a full overwrite, not a patch: the payload must carry a title,
//!   and omitted fields reset to their defaults.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use todo_store::{TodoDraft, TodoItem, TodoStore};

pub mod error;

pub use error::ApiError;

/// Builds the router over an externally owned store.
pub fn app(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route("/api/todo", get(list_todos).post(create_todo))
        .route(
            "/api/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

/// Serves the app on the listener until the process exits.
pub async fn run(
    listener: tokio::net::TcpListener,
    store: Arc<TodoStore>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_todos(State(store): State<Arc<TodoStore>>) -> Json<Vec<TodoItem>> {
    Json(store.all())
}

async fn get_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<u64>,
) -> Result<Json<TodoItem>, ApiError> {
    store.get(id).map(Json).ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(store): State<Arc<TodoStore>>,
    Json(draft): Json<TodoDraft>,
) -> Result<impl IntoResponse, ApiError> {
    if !draft.has_title() {
        return Err(ApiError::EmptyTitle);
    }
    let todo = store.create(draft);
    tracing::debug!(id = todo.id, "created todo");
    let location = format!("/api/todo/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

async fn update_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<u64>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<TodoItem>, ApiError> {
    if !draft.has_title() {
        return Err(ApiError::EmptyTitle);
    }
    store.update(id, draft).map(Json).ok_or(ApiError::NotFound)
}

async fn delete_todo(
    State(store): State<Arc<TodoStore>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if store.delete(id) {
        tracing::debug!(id, "deleted todo");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
