// ABOUTME: The single error type crossing the HTTP boundary.
// ABOUTME: Translates handler failures into status codes and {message} bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coursehub_core::ErrorBody;
use coursehub_store::StoreError;
use thiserror::Error;

use crate::identity::IdentityError;

/// Errors returned by API handlers. Converted into HTTP responses exactly
/// once, here; internal details are logged and replaced with generic
/// client-facing messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("identity provider error: {0}")]
    Identity(#[from] IdentityError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Store(e) => {
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_string(),
                )
            }
            ApiError::Identity(e) => {
                tracing::error!("identity provider error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "identity provider request failed".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
