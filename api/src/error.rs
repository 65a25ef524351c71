//! Unified error types for the Superheroes API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and persistence errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Request rejected before reaching the store
    #[error("Invalid request: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A request body referenced a hero or power that does not exist
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a single-message validation failure
    pub fn invalid(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

/// `{"error": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// `{"errors": [...]}`
#[derive(Serialize)]
struct ErrorsResponse {
    errors: Vec<String>,
}

fn single(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn many(status: StatusCode, errors: Vec<String>) -> Response {
    (status, Json(ErrorsResponse { errors })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Domain(DomainError::NotFound(msg)) | AppError::NotFound(msg) => {
                single(StatusCode::NOT_FOUND, msg)
            }
            AppError::Domain(DomainError::Validation(msg)) => {
                tracing::debug!("Store rejected write: {}", msg);
                many(StatusCode::BAD_REQUEST, vec![msg])
            }
            AppError::Validation(errors) => many(StatusCode::BAD_REQUEST, errors),
            AppError::UnresolvedReference(msg) => many(StatusCode::NOT_FOUND, vec![msg]),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                single(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Domain(DomainError::Internal(msg)) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                single(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid(rejection.body_text())
    }
}
