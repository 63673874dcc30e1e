use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use aviary_shared::ValidationError;
use aviary_store::StoreError;

/// Errors returned across the HTTP boundary.
///
/// Each variant carries the operation-specific message shown to the caller;
/// the underlying detail rides in the `error` field of the JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: &'static str },

    /// The request body could not be decoded at all.
    #[error("{message}: {detail}")]
    BadRequest {
        message: &'static str,
        detail: String,
    },

    /// The body decoded but failed the required-field constraints.
    #[error("{message}: {detail}")]
    Validation {
        message: &'static str,
        detail: ValidationError,
    },

    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Map a store failure to the HTTP taxonomy, attaching the operation's
    /// caller-facing message.  Raw store faults never escape past here.
    pub fn from_store(message: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound {
                message: "Bird not found",
            },
            StoreError::Validation(detail) => ApiError::Validation { message, detail },
            other => ApiError::Internal {
                message,
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "message": message }),
            ),
            ApiError::BadRequest { message, detail } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": message, "error": detail }),
            ),
            ApiError::Validation { message, detail } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": message, "error": detail.to_string() }),
            ),
            ApiError::Internal { message, detail } => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "message": message, "error": detail }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
