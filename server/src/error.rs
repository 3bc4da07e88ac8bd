//! Error types for the HTTP boundary.
//!
//! # Design
//! The store has exactly one failure mode — absence — and the boundary adds
//! one of its own: a blank title. Everything else axum rejects before a
//! handler runs (bad path ids, malformed JSON). Each variant maps to one
//! status code and a small JSON body.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors a handler can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No todo with the requested id — 404.
    NotFound,

    /// The submitted title is blank or missing — 400.
    EmptyTitle,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "todo not found"),
            ApiError::EmptyTitle => write!(f, "title is required"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyTitle => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_statuses() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EmptyTitle.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(ApiError::NotFound.to_string(), "todo not found");
        assert_eq!(ApiError::EmptyTitle.to_string(), "title is required");
    }
}
